//! Navigation destinations and route gating.
//!
//! The navigation surface is a fixed table of destinations, each visible to a
//! set of roles. [`visible_nav_items`] filters the table for the sidebar and
//! [`decide_route`] decides what a path resolves to for the current user.

use crate::role::Role;
use crate::user::User;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// A page reachable once signed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    Dashboard,
    Employees,
    Payroll,
    Leaves,
    Overtime,
    Attendance,
    Progress,
    MyRequests,
    Profile,
}

impl Destination {
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => DASHBOARD_PATH,
            Self::Employees => "/employees",
            Self::Payroll => "/payroll",
            Self::Leaves => "/leaves",
            Self::Overtime => "/overtime",
            Self::Attendance => "/attendance",
            Self::Progress => "/progress",
            Self::MyRequests => "/my-requests",
            Self::Profile => "/profile",
        }
    }

    /// Destination whose path is exactly `path`, ignoring one trailing slash.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        NAV_ITEMS
            .iter()
            .map(|item| item.destination)
            .find(|destination| destination.path() == path)
    }

    /// Sidebar entry declaring this destination.
    #[must_use]
    pub fn nav_item(self) -> &'static NavItem {
        NAV_ITEMS
            .iter()
            .find(|item| item.destination == self)
            .unwrap_or(&NAV_ITEMS[0])
    }

    #[must_use]
    pub fn is_visible_to(self, role: Role) -> bool {
        self.nav_item().roles.contains(&role)
    }
}

/// One sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub destination: Destination,
    pub label: &'static str,
    pub path: &'static str,
    pub roles: &'static [Role],
}

const EVERYONE: &[Role] = &[Role::Hr, Role::Manager, Role::Employee];

/// Every destination in sidebar order.
pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem {
        destination: Destination::Dashboard,
        label: "Dashboard",
        path: DASHBOARD_PATH,
        roles: EVERYONE,
    },
    NavItem {
        destination: Destination::Employees,
        label: "Employees",
        path: "/employees",
        roles: &[Role::Hr],
    },
    NavItem {
        destination: Destination::Payroll,
        label: "Payroll",
        path: "/payroll",
        roles: &[Role::Hr],
    },
    NavItem {
        destination: Destination::Leaves,
        label: "Leave Management",
        path: "/leaves",
        roles: &[Role::Hr, Role::Manager],
    },
    NavItem {
        destination: Destination::Overtime,
        label: "Overtime Requests",
        path: "/overtime",
        roles: &[Role::Hr, Role::Manager],
    },
    NavItem {
        destination: Destination::Attendance,
        label: "Attendance",
        path: "/attendance",
        roles: EVERYONE,
    },
    NavItem {
        destination: Destination::Progress,
        label: "Progress Reports",
        path: "/progress",
        roles: &[Role::Manager],
    },
    NavItem {
        destination: Destination::MyRequests,
        label: "My Requests",
        path: "/my-requests",
        roles: &[Role::Employee],
    },
    NavItem {
        destination: Destination::Profile,
        label: "Profile",
        path: "/profile",
        roles: &[Role::Employee],
    },
];

/// Items from `items` whose role set contains `role`, in their original order.
#[must_use]
pub fn visible_nav_items(role: Role, items: &[NavItem]) -> Vec<&NavItem> {
    items.iter().filter(|item| item.roles.contains(&role)).collect()
}

/// Outcome of resolving a path for the current user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Show the sign-in page.
    Login,
    Render(Destination),
    Redirect(&'static str),
    NotFound,
}

/// Resolve `path` against the navigation table for `user`.
///
/// Unauthenticated visitors reaching any destination go to the login page.
/// Signed-in users reaching a destination outside their role go back to the
/// dashboard.
#[must_use]
pub fn decide_route(path: &str, user: Option<&User>) -> RouteDecision {
    if path == "/" || path.is_empty() {
        return RouteDecision::Redirect(DASHBOARD_PATH);
    }
    if path == LOGIN_PATH {
        return match user {
            Some(_) => RouteDecision::Redirect(DASHBOARD_PATH),
            None => RouteDecision::Login,
        };
    }
    let Some(destination) = Destination::from_path(path) else {
        return RouteDecision::NotFound;
    };
    match user {
        None => RouteDecision::Redirect(LOGIN_PATH),
        Some(user) if destination.is_visible_to(user.role) => RouteDecision::Render(destination),
        Some(_) => RouteDecision::Redirect(DASHBOARD_PATH),
    }
}

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;
