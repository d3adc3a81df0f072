//! In-memory data collaborator.
//!
//! The dashboard reads five collections that are loaded once at startup and
//! never written back. [`Dataset::sample`] loads the bundled demo fixture;
//! [`Dataset::from_json`] accepts any document of the same shape.

use serde::{Deserialize, Serialize};

use crate::records::{AttendanceRecord, Employee, LeaveRequest, OvertimeRequest, ProgressReport};

const SAMPLE_JSON: &str = include_str!("../data/sample.json");

/// Error returned when a dataset document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("invalid dataset document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Leaves taken in one month, for the trend card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyLeaves {
    pub month: String,
    pub leaves: u32,
}

/// Every collection the dashboard renders.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub leave_requests: Vec<LeaveRequest>,
    pub overtime_requests: Vec<OvertimeRequest>,
    pub progress_reports: Vec<ProgressReport>,
    #[serde(default)]
    pub monthly_leaves: Vec<MonthlyLeaves>,
}

impl Dataset {
    /// Parse a dataset document.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] when the document is not valid JSON or a
    /// record carries an unknown status.
    pub fn from_json(json: &str) -> Result<Self, DataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The bundled demo fixture.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] if the bundled fixture is malformed.
    pub fn sample() -> Result<Self, DataError> {
        Self::from_json(SAMPLE_JSON)
    }

    #[must_use]
    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }
}

#[cfg(test)]
#[path = "dataset_test.rs"]
mod dataset_test;
