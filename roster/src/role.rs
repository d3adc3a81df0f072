//! User roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing a role string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoleError {
    #[error("unknown role: {0}")]
    Unknown(String),
}

/// Role of a signed-in user. Determines navigation and permissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Manager,
    Employee,
}

impl Role {
    pub const ALL: [Self; 3] = [Self::Hr, Self::Manager, Self::Employee];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "hr",
            Self::Manager => "manager",
            Self::Employee => "employee",
        }
    }

    /// Human-facing title shown next to the user's name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hr => "HR Manager",
            Self::Manager => "Department Manager",
            Self::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hr" => Ok(Self::Hr),
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            other => Err(RoleError::Unknown(other.to_owned())),
        }
    }
}

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;
