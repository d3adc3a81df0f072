//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages render inside `AppLayout`, which provides
//! the current `Session` as context.

pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod home;
pub mod leaves;
pub mod login;
pub mod my_requests;
pub mod not_found;
pub mod overtime;
pub mod payroll;
pub mod profile;
pub mod progress;
