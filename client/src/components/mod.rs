//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and tabular data while reading shared
//! session and dataset handles from Leptos context providers.

pub mod app_layout;
pub mod data_table;
pub mod decision_buttons;
pub mod kpi_card;
pub mod page_header;
pub mod status_badge;
