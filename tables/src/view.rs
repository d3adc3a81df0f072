//! Stateful table view: a column set plus the current query.

use std::collections::HashSet;

use crate::column::Column;
use crate::query::{Query, RowSet, SortDirection, SortState, next_sort};
use crate::value::{PLACEHOLDER, Record};

/// Error returned when a table is configured or driven with bad column keys.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Two columns in one view share a key.
    #[error("duplicate column key: {0}")]
    DuplicateColumn(String),
    /// A sort was requested for a key no column declares.
    #[error("unknown column key: {0}")]
    UnknownColumn(String),
}

/// Content of a single cell.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell<V> {
    /// Output of the column's render function.
    Rendered(V),
    /// Field value as text, or [`PLACEHOLDER`] when absent.
    Text(String),
}

/// Search and sort state over a fixed set of columns.
///
/// `V` is whatever the column renderers produce: plain strings in tests,
/// views in the client.
pub struct TableView<R, V = String> {
    columns: Vec<Column<R, V>>,
    query: Query,
}

impl<R: Record, V> TableView<R, V> {
    /// Build a view over `columns`. Column keys must be unique.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateColumn`] naming the first repeated key.
    pub fn new(columns: Vec<Column<R, V>>) -> Result<Self, TableError> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key()) {
                return Err(TableError::DuplicateColumn(column.key().to_owned()));
            }
        }
        Ok(Self {
            columns,
            query: Query::default(),
        })
    }

    #[must_use]
    pub fn columns(&self) -> &[Column<R, V>] {
        &self.columns
    }

    #[must_use]
    pub fn query(&self) -> &Query {
        &self.query
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        self.query.search_term()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.set_search_term(term);
    }

    /// Advance the sort cycle for `key`. Non-sortable columns are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::UnknownColumn`] when no column has `key`.
    pub fn toggle_sort(&mut self, key: &str) -> Result<Option<&SortState>, TableError> {
        let column = self
            .columns
            .iter()
            .find(|column| column.key() == key)
            .ok_or_else(|| TableError::UnknownColumn(key.to_owned()))?;
        if column.is_sortable() {
            let next = next_sort(self.query.sort(), key);
            self.query.set_sort(next);
        }
        Ok(self.query.sort())
    }

    /// Direction the view is currently sorted by `key`, if any.
    #[must_use]
    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.query
            .sort()
            .filter(|sort| sort.key == key)
            .map(|sort| sort.direction)
    }

    /// Rows to display for `records` under the current search and sort.
    pub fn rows<'a>(&self, records: &'a [R]) -> RowSet<'a, R> {
        self.query.apply(records)
    }

    /// Content of the cell where `record` meets `column`.
    pub fn cell(&self, record: &R, column: &Column<R, V>) -> Cell<V> {
        match column.renderer() {
            Some(render) => Cell::Rendered(render(record)),
            None => Cell::Text(
                record
                    .field(column.key())
                    .as_text()
                    .unwrap_or_else(|| PLACEHOLDER.to_owned()),
            ),
        }
    }
}

impl<R, V> Clone for TableView<R, V> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
            query: self.query.clone(),
        }
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;
