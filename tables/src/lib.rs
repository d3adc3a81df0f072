//! Search, sort and cell rendering for tabular views over in-memory records.
//!
//! This crate is UI-framework agnostic. The client wraps a [`TableView`] in a
//! reactive signal and renders whatever [`TableView::rows`] and
//! [`TableView::cell`] hand back.
//!
//! DESIGN
//! ======
//! Records expose their fields as loosely typed [`Value`]s so one engine can
//! serve every domain collection. Search looks at every field of a record, not
//! only the displayed columns. Sorting compares the string form of a field with
//! a locale-like collation, so numbers and dates order lexicographically.
//!
//! ERROR HANDLING
//! ==============
//! Column sets with duplicate keys and sort requests for unknown keys are
//! caller defects and come back as [`TableError`]. Render closures are not
//! guarded: a panic inside one reaches the caller's error boundary.

mod collate;
mod column;
mod query;
mod value;
mod view;

pub use collate::locale_compare;
pub use column::{Column, Renderer};
pub use query::{Query, RowSet, SortDirection, SortState, next_sort};
pub use value::{PLACEHOLDER, Record, Value};
pub use view::{Cell, TableError, TableView};
