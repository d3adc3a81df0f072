//! Coloured pill showing a record status.

use leptos::prelude::*;
use roster::status::Status;

/// CSS classes for a badge of `status`.
pub fn badge_class(status: Status) -> String {
    format!("status-badge status-badge--{}", status.tone().as_str())
}

#[component]
pub fn StatusBadge(#[prop(into)] status: Status) -> impl IntoView {
    view! { <span class=badge_class(status)>{status.label()}</span> }
}

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;
