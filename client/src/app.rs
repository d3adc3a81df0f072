//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use roster::auth::AccountDirectory;
use roster::dataset::Dataset;

use crate::components::app_layout::AppLayout;
use crate::pages::{
    attendance::AttendancePage, dashboard::DashboardPage, employees::EmployeesPage,
    home::HomeRedirect, leaves::LeavesPage, login::LoginPage, my_requests::MyRequestsPage,
    not_found::NotFoundPage, overtime::OvertimePage, payroll::PayrollPage,
    profile::ProfilePage, progress::ProgressPage,
};
use crate::state::data::DataProvider;
use crate::state::session::{AuthProvider, SessionContext};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the three collaborators once and provides them as context: the
/// session, the credential verifier, and the dataset.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let dataset = Dataset::sample().unwrap_or_else(|e| {
        leptos::logging::error!("failed to load dataset: {e}");
        Dataset::default()
    });
    let accounts = AccountDirectory::demo().unwrap_or_else(|e| {
        leptos::logging::error!("failed to load accounts: {e}");
        AccountDirectory::default()
    });

    provide_context(SessionContext::new());
    provide_context(AuthProvider::new(Arc::new(accounts)));
    provide_context(DataProvider::new(dataset));

    view! {
        <Stylesheet id="leptos" href="/pkg/workflow.css"/>
        <Title text="WorkFlow Pro"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomeRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=|| view! { <AppLayout><DashboardPage/></AppLayout> }/>
                <Route path=StaticSegment("employees") view=|| view! { <AppLayout><EmployeesPage/></AppLayout> }/>
                <Route path=StaticSegment("payroll") view=|| view! { <AppLayout><PayrollPage/></AppLayout> }/>
                <Route path=StaticSegment("leaves") view=|| view! { <AppLayout><LeavesPage/></AppLayout> }/>
                <Route path=StaticSegment("overtime") view=|| view! { <AppLayout><OvertimePage/></AppLayout> }/>
                <Route path=StaticSegment("attendance") view=|| view! { <AppLayout><AttendancePage/></AppLayout> }/>
                <Route path=StaticSegment("progress") view=|| view! { <AppLayout><ProgressPage/></AppLayout> }/>
                <Route path=StaticSegment("my-requests") view=|| view! { <AppLayout><MyRequestsPage/></AppLayout> }/>
                <Route path=StaticSegment("profile") view=|| view! { <AppLayout><ProfilePage/></AppLayout> }/>
            </Routes>
        </Router>
    }
}
