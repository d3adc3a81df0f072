//! Search term, sort state and the filter/sort pass over a record slice.

use std::cmp::Ordering;

use crate::collate::locale_compare;
use crate::value::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Active sort column and direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortState {
    pub key: String,
    pub direction: SortDirection,
}

/// Sort state after the user activates the header for `key`.
///
/// The same key cycles ascending, descending, then off. A different key
/// always starts over at ascending.
#[must_use]
pub fn next_sort(current: Option<&SortState>, key: &str) -> Option<SortState> {
    let direction = match current {
        Some(state) if state.key == key => match state.direction {
            SortDirection::Ascending => Some(SortDirection::Descending),
            SortDirection::Descending => None,
        },
        _ => Some(SortDirection::Ascending),
    };
    direction.map(|direction| SortState {
        key: key.to_owned(),
        direction,
    })
}

/// Rows produced by a [`Query`].
#[derive(Debug, PartialEq)]
pub enum RowSet<'a, R> {
    /// At least one record survived filtering, in display order.
    Rows(Vec<&'a R>),
    /// Nothing to show; callers render a single explanatory row.
    NoMatches,
}

impl<'a, R> RowSet<'a, R> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoMatches)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Rows(rows) => rows.len(),
            Self::NoMatches => 0,
        }
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<&'a R> {
        match self {
            Self::Rows(rows) => rows,
            Self::NoMatches => Vec::new(),
        }
    }
}

/// Free-text search plus optional sort.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Query {
    term: String,
    needle: String,
    sort: Option<SortState>,
}

impl Query {
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.needle = self.term.to_lowercase();
    }

    pub(crate) fn set_sort(&mut self, sort: Option<SortState>) {
        self.sort = sort;
    }

    /// Case-insensitive substring match against every field of `record`.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.fields().iter().any(|(_, value)| {
            value
                .as_text()
                .is_some_and(|text| text.to_lowercase().contains(&self.needle))
        })
    }

    /// Filter then sort `records`. Without an active sort the input order is kept.
    pub fn apply<'a, R: Record>(&self, records: &'a [R]) -> RowSet<'a, R> {
        let filtered = records.iter().filter(|record| self.matches(*record));
        let rows: Vec<&R> = match &self.sort {
            None => filtered.collect(),
            Some(sort) => {
                let mut keyed: Vec<(Option<String>, &R)> = filtered
                    .map(|record| (record.field(&sort.key).as_text(), record))
                    .collect();
                keyed.sort_by(|(a, _), (b, _)| {
                    compare_nullable(a.as_deref(), b.as_deref(), sort.direction)
                });
                keyed.into_iter().map(|(_, record)| record).collect()
            }
        };
        if rows.is_empty() {
            RowSet::NoMatches
        } else {
            RowSet::Rows(rows)
        }
    }
}

/// Missing values go last regardless of `direction`; only the comparison of
/// two present values is reversed for descending order.
fn compare_nullable(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => {
            let ordering = locale_compare(a, b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;
