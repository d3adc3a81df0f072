//! Read-only dataset handle shared by every page.

use std::sync::Arc;

use roster::access::{AccessFilter, Scoped};
use roster::dataset::Dataset;
use roster::user::User;

/// Data collaborator plus the row filter built from its roster.
#[derive(Clone)]
pub struct DataProvider {
    dataset: Arc<Dataset>,
    access: Arc<AccessFilter>,
}

impl DataProvider {
    pub fn new(dataset: Dataset) -> Self {
        let access = AccessFilter::new(&dataset.employees);
        Self {
            dataset: Arc::new(dataset),
            access: Arc::new(access),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Rows from `records` that `user` may see.
    pub fn scoped<T: Scoped + Clone>(&self, records: &[T], user: &User) -> Vec<T> {
        self.access.scoped(records, user)
    }
}
