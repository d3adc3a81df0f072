//! Request decisions and form drafts.
//!
//! Everything here works on a page's own copy of the records; nothing is
//! written back to the dataset.
//!
//! ERROR HANDLING
//! ==============
//! Drafts validate into a [`DraftError`] whose message is shown inline on the
//! form. Decisions fail with [`RequestError`] when the role may not decide,
//! the id is unknown, or the request already left `Pending`.

use chrono::NaiveDate;

use crate::access::{Action, is_action_allowed};
use crate::records::{Employee, EmployeeStatus, LeaveRequest, LeaveType, OvertimeRequest, RequestStatus};
use crate::role::Role;
use crate::user::User;

/// Departments offered when adding an employee.
pub const DEPARTMENTS: [&str; 5] = [
    "Engineering",
    "Human Resources",
    "Marketing",
    "Finance",
    "Operations",
];

/// Longest overtime claim accepted for one day.
pub const MAX_OVERTIME_HOURS: f64 = 24.0;

// =============================================================================
// DECISIONS
// =============================================================================

/// A record that moves through the request lifecycle.
pub trait Request {
    fn id(&self) -> &str;
    fn status(&self) -> RequestStatus;
    fn set_status(&mut self, status: RequestStatus);
}

impl Request for LeaveRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

impl Request for OvertimeRequest {
    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn set_status(&mut self, status: RequestStatus) {
        self.status = status;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("this role cannot approve or reject requests")]
    Forbidden,
    #[error("request not found: {0}")]
    NotFound(String),
    #[error("request is already {}", .0.as_str())]
    AlreadyDecided(RequestStatus),
}

impl RequestStatus {
    /// Status after `decision`. Only pending requests can be decided.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::AlreadyDecided`] for approved or rejected requests.
    pub fn decide(self, decision: Decision) -> Result<Self, RequestError> {
        match (self, decision) {
            (Self::Pending, Decision::Approve) => Ok(Self::Approved),
            (Self::Pending, Decision::Reject) => Ok(Self::Rejected),
            (decided, _) => Err(RequestError::AlreadyDecided(decided)),
        }
    }
}

/// Apply `decision` to the request with `id` on behalf of `role`.
///
/// # Errors
///
/// Returns [`RequestError::Forbidden`] unless the role may decide requests,
/// [`RequestError::NotFound`] for an unknown id, and
/// [`RequestError::AlreadyDecided`] when the request is no longer pending.
pub fn decide<T: Request>(
    requests: &mut [T],
    id: &str,
    decision: Decision,
    role: Role,
) -> Result<RequestStatus, RequestError> {
    if !is_action_allowed(role, Action::DecideRequest) {
        return Err(RequestError::Forbidden);
    }
    let request = requests
        .iter_mut()
        .find(|request| request.id() == id)
        .ok_or_else(|| RequestError::NotFound(id.to_owned()))?;
    let status = request.status().decide(decision)?;
    request.set_status(status);
    log::info!("request {id} {}", status.as_str());
    Ok(status)
}

// =============================================================================
// DRAFTS
// =============================================================================

/// Validation failure on a submitted form.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} is not a valid date")]
    InvalidDate(String),
    #[error("End date must be on or after the start date")]
    EndBeforeStart,
    #[error("Hours must be greater than 0 and at most 24")]
    InvalidHours,
    #[error("Salary must be a whole number")]
    InvalidSalary,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Unknown department: {0}")]
    UnknownDepartment(String),
    #[error("Passwords do not match")]
    PasswordMismatch,
}

fn required(value: &str, field: &'static str) -> Result<String, DraftError> {
    let value = value.trim();
    if value.is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(value.to_owned())
    }
}

fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, DraftError> {
    let value = required(value, field)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d").map_err(|_| DraftError::InvalidDate(value))
}

/// Next free numeric id among `ids`.
#[must_use]
pub fn next_id<'a>(ids: impl IntoIterator<Item = &'a str>) -> u32 {
    ids.into_iter()
        .filter_map(|id| id.parse::<u32>().ok())
        .max()
        .map_or(1, |max| max + 1)
}

/// Leave request form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaveDraft {
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveDraft {
    /// Validate and turn into a pending request for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] for missing fields, unparseable dates, or an end
    /// date before the start date.
    pub fn submit(
        self,
        user: &User,
        existing: &[LeaveRequest],
        today: &str,
    ) -> Result<LeaveRequest, DraftError> {
        let start = parse_date(&self.start_date, "Start date")?;
        let end = parse_date(&self.end_date, "End date")?;
        if end < start {
            return Err(DraftError::EndBeforeStart);
        }
        let reason = required(&self.reason, "Reason")?;
        let days = u32::try_from((end - start).num_days() + 1)
            .map_err(|_| DraftError::EndBeforeStart)?;
        Ok(LeaveRequest {
            id: next_id(existing.iter().map(|r| r.id.as_str())).to_string(),
            employee_id: user.id.clone(),
            employee_name: user.name.clone(),
            department: user.department.clone(),
            leave_type: self.leave_type,
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
            days,
            reason,
            status: RequestStatus::Pending,
            applied_date: today.to_owned(),
        })
    }
}

/// Overtime request form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OvertimeDraft {
    pub date: String,
    pub hours: String,
    pub reason: String,
}

impl OvertimeDraft {
    /// Validate and turn into a pending request for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] for missing fields, an unparseable date, or
    /// hours outside `(0, 24]`.
    pub fn submit(
        self,
        user: &User,
        existing: &[OvertimeRequest],
        today: &str,
    ) -> Result<OvertimeRequest, DraftError> {
        let date = parse_date(&self.date, "Date")?;
        let hours = required(&self.hours, "Hours")?
            .parse::<f64>()
            .map_err(|_| DraftError::InvalidHours)?;
        if !(hours > 0.0 && hours <= MAX_OVERTIME_HOURS) {
            return Err(DraftError::InvalidHours);
        }
        let reason = required(&self.reason, "Reason")?;
        Ok(OvertimeRequest {
            id: next_id(existing.iter().map(|r| r.id.as_str())).to_string(),
            employee_id: user.id.clone(),
            employee_name: user.name.clone(),
            department: user.department.clone(),
            date: date.format("%Y-%m-%d").to_string(),
            hours,
            reason,
            status: RequestStatus::Pending,
            applied_date: today.to_owned(),
        })
    }
}

/// Add-employee form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub salary: String,
}

impl Default for EmployeeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            department: DEPARTMENTS[0].to_owned(),
            position: String::new(),
            status: EmployeeStatus::Probationary,
            salary: String::new(),
        }
    }
}

impl EmployeeDraft {
    /// Validate and turn into a new employee joining on `today`.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError`] for missing fields, a malformed email, an
    /// unknown department, or a non-numeric salary.
    pub fn submit(self, existing: &[Employee], today: &str) -> Result<Employee, DraftError> {
        let name = required(&self.name, "Name")?;
        let email = required(&self.email, "Email")?.to_ascii_lowercase();
        if !is_plausible_email(&email) {
            return Err(DraftError::InvalidEmail);
        }
        let department = required(&self.department, "Department")?;
        if !DEPARTMENTS.contains(&department.as_str()) {
            return Err(DraftError::UnknownDepartment(department));
        }
        let position = required(&self.position, "Position")?;
        let salary = required(&self.salary, "Salary")?
            .parse::<u32>()
            .map_err(|_| DraftError::InvalidSalary)?;
        let id = next_id(existing.iter().map(|e| e.id.as_str()));
        Ok(Employee {
            id: id.to_string(),
            employee_number: format!("EMP{id:03}"),
            name,
            email,
            department,
            position,
            status: self.status,
            join_date: today.to_owned(),
            manager: "TBD".to_owned(),
            salary,
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Password change form on the profile page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

impl PasswordChange {
    /// # Errors
    ///
    /// Returns [`DraftError::Missing`] for blank fields and
    /// [`DraftError::PasswordMismatch`] when the confirmation differs.
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.current.is_empty() {
            return Err(DraftError::Missing("Current password"));
        }
        if self.new.is_empty() {
            return Err(DraftError::Missing("New password"));
        }
        if self.new != self.confirm {
            return Err(DraftError::PasswordMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "requests_test.rs"]
mod requests_test;
