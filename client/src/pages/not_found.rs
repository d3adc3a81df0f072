//! Fallback page for unknown paths.

use leptos::prelude::*;
use roster::nav::DASHBOARD_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Oops! Page not found"</p>
            <a class="not-found__link" href=DASHBOARD_PATH>"Return to Home"</a>
        </div>
    }
}
