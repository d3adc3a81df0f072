//! Title block at the top of each page.

use leptos::prelude::*;

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-header__title">{title}</h1>
            {subtitle.map(|subtitle| view! { <p class="page-header__subtitle">{subtitle}</p> })}
        </header>
    }
}
