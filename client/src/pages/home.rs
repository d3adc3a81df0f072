//! `/` entry point.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use roster::nav::DASHBOARD_PATH;

/// Sends visitors on to the dashboard; the layout there handles sign-in.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate(DASHBOARD_PATH, NavigateOptions::default());
    });
    view! { <p class="app-layout__redirect">"Redirecting..."</p> }
}
