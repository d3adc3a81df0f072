//! Headline figure card used across dashboards and page summaries.

use leptos::prelude::*;

#[component]
pub fn KpiCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional)] accent: Option<&'static str>,
) -> impl IntoView {
    let class = match accent {
        Some(accent) => format!("kpi-card kpi-card--{accent}"),
        None => "kpi-card".to_owned(),
    };
    view! {
        <div class=class>
            <span class="kpi-card__title">{title}</span>
            <span class="kpi-card__value">{move || value.get()}</span>
            {hint.map(|hint| view! { <span class="kpi-card__hint">{hint}</span> })}
        </div>
    }
}
