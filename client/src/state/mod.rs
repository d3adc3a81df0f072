//! Reactive wrappers around the domain collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides each wrapper once through Leptos context. Components read
//! them with `expect_context`; nothing lives in a global.

pub mod data;
pub mod session;
