//! Authenticated user identity.

use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A user known to the credential store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Employee id; matches `Employee::id` in the dataset.
    pub id: String,
    pub email: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    pub employee_number: String,
    pub department: String,
}

impl User {
    /// Uppercased first letter of each part of the name.
    #[must_use]
    pub fn initials(&self) -> String {
        crate::format::initials(&self.name)
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}
