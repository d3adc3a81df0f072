//! Authenticated page chrome: sidebar navigation, user badge, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders inside this layout. The layout resolves the
//! current path against the session with `roster::nav::decide_route` and only
//! builds its children once the route is allowed. The established `Session`
//! is then provided as context, so pages can rely on it being present.

use leptos::context::Provider;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use roster::nav::{NAV_ITEMS, RouteDecision, decide_route, visible_nav_items};
use roster::session::Session;

use crate::pages::not_found::NotFoundPage;
use crate::state::session::SessionContext;

/// Product name shown in the sidebar.
pub const PRODUCT_NAME: &str = "WorkFlow Pro";

#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let location = use_location();
    let navigate = use_navigate();

    let route = Memo::new(move |_| {
        let current = session.session();
        let path = location.pathname.get();
        let decision = decide_route(&path, current.as_ref().map(Session::user));
        (decision, current)
    });

    // Logout clears the session; the route memo then resolves to a login redirect.
    Effect::new(move || {
        if let (RouteDecision::Redirect(path), _) = route.get() {
            navigate(path, NavigateOptions::default());
        }
    });

    let on_logout = move |_| session.logout();

    let children = StoredValue::new(children);

    move || match route.get() {
        (RouteDecision::Render(destination), Some(current)) => {
            let user = current.user().clone();
            let nav = visible_nav_items(user.role, &NAV_ITEMS)
                .into_iter()
                .map(|item| {
                    let active = item.destination == destination;
                    view! {
                        <a class="sidebar__link" class:sidebar__link--active=active href=item.path>
                            {item.label}
                        </a>
                    }
                })
                .collect_view();
            view! {
                <div class="app-layout">
                    <aside class="sidebar">
                        <div class="sidebar__brand">{PRODUCT_NAME}</div>
                        <nav class="sidebar__nav">{nav}</nav>
                        <div class="sidebar__user">
                            <span class="sidebar__avatar">{user.initials()}</span>
                            <div class="sidebar__identity">
                                <span class="sidebar__name">{user.name.clone()}</span>
                                <span class="sidebar__role">{user.role.label()}</span>
                            </div>
                        </div>
                        <button class="sidebar__logout" on:click=on_logout>
                            "Sign out"
                        </button>
                    </aside>
                    <main class="app-layout__content">
                        <Provider value=current>
                            {children.with_value(|children| children())}
                        </Provider>
                    </main>
                </div>
            }
            .into_any()
        }
        (RouteDecision::NotFound, _) => view! { <NotFoundPage/> }.into_any(),
        _ => view! { <p class="app-layout__redirect">"Redirecting..."</p> }.into_any(),
    }
}
