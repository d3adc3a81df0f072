//! Profile page: personal details and password change.

use leptos::prelude::*;
use roster::requests::PasswordChange;
use roster::session::Session;
use roster::user::User;

use crate::components::page_header::PageHeader;
use crate::state::data::DataProvider;

/// Label/value rows shown in the personal information card.
pub fn profile_rows(user: &User, position: Option<&str>) -> Vec<(&'static str, String)> {
    vec![
        ("Full Name", user.name.clone()),
        ("Email", user.email.clone()),
        ("Employee Number", user.employee_number.clone()),
        ("Department", user.department.clone()),
        ("Position", position.unwrap_or(user.role.label()).to_owned()),
        ("Role", user.role.label().to_owned()),
    ]
}

/// Outcome message for a password change attempt.
pub fn password_notice(change: &PasswordChange) -> Result<&'static str, String> {
    change
        .validate()
        .map(|()| "Password updated successfully")
        .map_err(|e| e.to_string())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<Session>();
    let data = expect_context::<DataProvider>();
    let user = session.user().clone();
    let position = data.dataset().employee(&user.id).map(|e| e.position.clone());
    let rows = profile_rows(&user, position.as_deref())
        .into_iter()
        .map(|(label, value)| {
            view! {
                <div class="profile-row">
                    <dt>{label}</dt>
                    <dd>{value}</dd>
                </div>
            }
        })
        .collect_view();

    let phone = RwSignal::new(String::new());
    let contact_notice = RwSignal::new(None::<String>);
    let save_contact = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        contact_notice.set(Some("Contact information updated".to_owned()));
    };

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let password_result = RwSignal::new(None::<Result<&'static str, String>>);
    let change_password = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let change = PasswordChange {
            current: current.get_untracked(),
            new: new.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        let result = password_notice(&change);
        if result.is_ok() {
            current.set(String::new());
            new.set(String::new());
            confirm.set(String::new());
        }
        password_result.set(Some(result));
    };

    view! {
        <PageHeader title="My Profile" subtitle="Manage your personal information"/>
        <section class="profile-card">
            <div class="profile-card__avatar">{user.initials()}</div>
            <div>
                <h2 class="profile-card__name">{user.name.clone()}</h2>
                <p class="profile-card__role">{user.role.label()}</p>
            </div>
        </section>
        <section class="form-card">
            <h2 class="form-card__title">"Personal Information"</h2>
            <dl class="profile-details">{rows}</dl>
        </section>
        <form class="form-card" on:submit=save_contact>
            <h2 class="form-card__title">"Contact"</h2>
            <label class="form-field">
                <span>"Phone"</span>
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <div class="form-card__actions">
                <button class="button" type="submit">"Save Changes"</button>
            </div>
            <Show when=move || contact_notice.get().is_some()>
                <p class="toast">{move || contact_notice.get().unwrap_or_default()}</p>
            </Show>
        </form>
        <form class="form-card" on:submit=change_password>
            <h2 class="form-card__title">"Change Password"</h2>
            <label class="form-field">
                <span>"Current Password"</span>
                <input
                    type="password"
                    prop:value=move || current.get()
                    on:input=move |ev| current.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"New Password"</span>
                <input
                    type="password"
                    prop:value=move || new.get()
                    on:input=move |ev| new.set(event_target_value(&ev))
                />
            </label>
            <label class="form-field">
                <span>"Confirm Password"</span>
                <input
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            {move || {
                password_result.get().map(|result| match result {
                    Ok(message) => view! { <p class="toast">{message}</p> }.into_any(),
                    Err(message) => view! { <p class="form-error">{message}</p> }.into_any(),
                })
            }}
            <div class="form-card__actions">
                <button class="button button--primary" type="submit">"Update Password"</button>
            </div>
        </form>
    }
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;
