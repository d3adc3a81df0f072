//! Login page: email + password against the configured authenticator.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use roster::nav::DASHBOARD_PATH;
use roster::session::LoginError;

use crate::state::session::{AuthProvider, SessionContext};

/// Simulated round trip before a login attempt resolves in the browser.
#[cfg(feature = "hydrate")]
const LOGIN_LATENCY: std::time::Duration = std::time::Duration::from_millis(800);

/// Sign-in hints listed under the form: (role label, email).
pub const DEMO_ACCOUNTS: [(&str, &str); 3] = [
    ("HR Manager", "hr@company.qa"),
    ("Department Manager", "manager@company.qa"),
    ("Employee", "employee@company.qa"),
];

/// Password shared by the demo accounts, shown as a hint only.
pub const DEMO_PASSWORD_HINT: &str = "password123";

/// Trim the email and require both fields.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), LoginError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let auth = expect_context::<AuthProvider>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    Effect::new(move || {
        if session.is_authenticated() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok((identifier, secret)) = validate_login_input(&email.get(), &password.get()) else {
            session.reject_input();
            return;
        };
        let Some(ticket) = session.begin_login() else {
            return;
        };
        let user = auth.verify(&identifier, &secret);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(LOGIN_LATENCY).await;
            session.complete_login(ticket, user);
        });
        #[cfg(not(feature = "hydrate"))]
        session.complete_login(ticket, user);
    };

    let demo_accounts = DEMO_ACCOUNTS
        .into_iter()
        .map(|(label, address)| {
            let on_pick = move |_| {
                email.set(address.to_owned());
                password.set(DEMO_PASSWORD_HINT.to_owned());
            };
            view! {
                <li class="login-demo__item">
                    <button class="login-demo__button" type="button" on:click=on_pick>
                        <span class="login-demo__role">{label}</span>
                        <span class="login-demo__email">{address}</span>
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"WorkFlow Pro"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-label" for="login-email">"Email"</label>
                    <input
                        id="login-email"
                        class="login-input"
                        type="email"
                        placeholder="you@company.qa"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="login-password">"Password"</label>
                    <input
                        id="login-password"
                        class="login-input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <Show when=move || session.error_message().is_some()>
                        <p class="login-message login-message--error">
                            {move || session.error_message().unwrap_or_default()}
                        </p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || session.is_pending()>
                        {move || if session.is_pending() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    {format!("Demo accounts (password: {DEMO_PASSWORD_HINT})")}
                </p>
                <ul class="login-demo">{demo_accounts}</ul>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
