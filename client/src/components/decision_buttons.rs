//! Approve / reject buttons shown on pending request rows.

use leptos::prelude::*;
use roster::requests::Decision;

#[component]
pub fn DecisionButtons(on_decide: Callback<Decision>) -> impl IntoView {
    view! {
        <div class="decision-buttons">
            <button
                class="button button--small button--success"
                on:click=move |_| on_decide.run(Decision::Approve)
            >
                "Approve"
            </button>
            <button
                class="button button--small button--danger"
                on:click=move |_| on_decide.run(Decision::Reject)
            >
                "Reject"
            </button>
        </div>
    }
}

/// Toast text after a decision on a request of `kind`.
pub fn decision_notice(kind: &str, decision: Decision) -> String {
    match decision {
        Decision::Approve => format!("{kind} approved"),
        Decision::Reject => format!("{kind} rejected"),
    }
}

#[cfg(test)]
#[path = "decision_buttons_test.rs"]
mod decision_buttons_test;
