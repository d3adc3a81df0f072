//! Domain records supplied by the dataset.
//!
//! Each record implements [`tables::Record`] so it can be searched and sorted
//! by a table view. Field keys are the snake_case names used in the data file;
//! status-like fields expose their wire form (`on-leave`, `half-day`) so that
//! searching for what the data says finds it.

use serde::{Deserialize, Serialize};
use tables::{Record, Value};

use crate::status::Status;

// =============================================================================
// STATUS ENUMS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    Regular,
    Probationary,
    Resigned,
}

impl EmployeeStatus {
    pub const ALL: [Self; 3] = [Self::Regular, Self::Probationary, Self::Resigned];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Probationary => "probationary",
            Self::Resigned => "resigned",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
    HalfDay,
    OnLeave,
}

impl AttendanceStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Late => "late",
            Self::Absent => "absent",
            Self::HalfDay => "half-day",
            Self::OnLeave => "on-leave",
        }
    }
}

/// Lifecycle of a leave or overtime request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Annual,
    Sick,
    Emergency,
    Unpaid,
}

impl LeaveType {
    pub const ALL: [Self; 4] = [Self::Annual, Self::Sick, Self::Emergency, Self::Unpaid];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Emergency => "emergency",
            Self::Unpaid => "unpaid",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Annual => "Annual Leave",
            Self::Sick => "Sick Leave",
            Self::Emergency => "Emergency Leave",
            Self::Unpaid => "Unpaid Leave",
        }
    }

    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }
}

impl From<EmployeeStatus> for Status {
    fn from(status: EmployeeStatus) -> Self {
        match status {
            EmployeeStatus::Regular => Self::Regular,
            EmployeeStatus::Probationary => Self::Probationary,
            EmployeeStatus::Resigned => Self::Resigned,
        }
    }
}

impl From<AttendanceStatus> for Status {
    fn from(status: AttendanceStatus) -> Self {
        match status {
            AttendanceStatus::Present => Self::Present,
            AttendanceStatus::Late => Self::Late,
            AttendanceStatus::Absent => Self::Absent,
            AttendanceStatus::HalfDay => Self::HalfDay,
            AttendanceStatus::OnLeave => Self::OnLeave,
        }
    }
}

impl From<RequestStatus> for Status {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Pending => Self::Pending,
            RequestStatus::Approved => Self::Approved,
            RequestStatus::Rejected => Self::Rejected,
        }
    }
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub employee_number: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub join_date: String,
    pub manager: String,
    /// Monthly basic salary in QAR.
    pub salary: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub date: String,
    pub day: String,
    /// `HH:MM`; absent when the employee never clocked in.
    pub time_in: Option<String>,
    pub time_out: Option<String>,
    pub status: AttendanceStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub days: u32,
    pub reason: String,
    pub status: RequestStatus,
    pub applied_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OvertimeRequest {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub department: String,
    pub date: String,
    pub hours: f64,
    pub reason: String,
    pub status: RequestStatus,
    pub applied_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub id: String,
    pub employee_id: String,
    pub employee_name: String,
    pub date: String,
    pub tasks_completed: Vec<String>,
    pub tasks_in_progress: Vec<String>,
    pub blockers: Vec<String>,
    pub hours_worked: f64,
}

impl Record for Employee {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", (&self.id).into()),
            ("employee_number", (&self.employee_number).into()),
            ("name", (&self.name).into()),
            ("email", (&self.email).into()),
            ("department", (&self.department).into()),
            ("position", (&self.position).into()),
            ("status", self.status.as_str().into()),
            ("join_date", (&self.join_date).into()),
            ("manager", (&self.manager).into()),
            ("salary", self.salary.into()),
        ]
    }
}

impl Record for AttendanceRecord {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", (&self.id).into()),
            ("employee_id", (&self.employee_id).into()),
            ("employee_name", (&self.employee_name).into()),
            ("date", (&self.date).into()),
            ("day", (&self.day).into()),
            ("time_in", self.time_in.as_ref().into()),
            ("time_out", self.time_out.as_ref().into()),
            ("status", self.status.as_str().into()),
        ]
    }
}

impl Record for LeaveRequest {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", (&self.id).into()),
            ("employee_id", (&self.employee_id).into()),
            ("employee_name", (&self.employee_name).into()),
            ("department", (&self.department).into()),
            ("type", self.leave_type.as_str().into()),
            ("start_date", (&self.start_date).into()),
            ("end_date", (&self.end_date).into()),
            ("days", self.days.into()),
            ("reason", (&self.reason).into()),
            ("status", self.status.as_str().into()),
            ("applied_date", (&self.applied_date).into()),
        ]
    }
}

impl Record for OvertimeRequest {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", (&self.id).into()),
            ("employee_id", (&self.employee_id).into()),
            ("employee_name", (&self.employee_name).into()),
            ("department", (&self.department).into()),
            ("date", (&self.date).into()),
            ("hours", self.hours.into()),
            ("reason", (&self.reason).into()),
            ("status", self.status.as_str().into()),
            ("applied_date", (&self.applied_date).into()),
        ]
    }
}

impl Record for ProgressReport {
    fn fields(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", (&self.id).into()),
            ("employee_id", (&self.employee_id).into()),
            ("employee_name", (&self.employee_name).into()),
            ("date", (&self.date).into()),
            ("tasks_completed", self.tasks_completed.as_slice().into()),
            ("tasks_in_progress", self.tasks_in_progress.as_slice().into()),
            ("blockers", self.blockers.as_slice().into()),
            ("hours_worked", self.hours_worked.into()),
        ]
    }
}

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;
