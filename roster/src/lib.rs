//! Domain model for the WorkFlow Pro HR dashboard.
//!
//! This crate is UI-framework agnostic so the client can render from it
//! directly and tests can exercise every rule without a browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Three collaborators feed the dashboard: the [`dataset::Dataset`] supplying
//! the record collections, an [`auth::Authenticator`] verifying credentials,
//! and the [`session::SessionState`] owning the signed-in user. Navigation and
//! row visibility are pure functions of the session's role, in [`nav`] and
//! [`access`].

pub mod access;
pub mod auth;
pub mod dataset;
pub mod format;
pub mod nav;
pub mod payroll;
pub mod records;
pub mod requests;
pub mod role;
pub mod session;
pub mod stats;
pub mod status;
pub mod user;

pub use role::Role;
pub use user::User;
