//! Role-based action gating and row scoping.
//!
//! Pages hand their records through [`AccessFilter::scoped`] before building a
//! table, so a manager only ever sees their department and an employee only
//! their own rows. HR sees everything.

use std::collections::HashMap;

use crate::records::{AttendanceRecord, Employee, LeaveRequest, OvertimeRequest, ProgressReport};
use crate::role::Role;
use crate::user::User;

/// An operation whose availability depends on role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Approve or reject a leave or overtime request.
    DecideRequest,
    /// Create or edit an employee record.
    ManageEmployees,
}

#[must_use]
pub fn is_action_allowed(role: Role, action: Action) -> bool {
    match action {
        Action::DecideRequest => role == Role::Manager,
        Action::ManageEmployees => role == Role::Hr,
    }
}

/// A record owned by one employee and, possibly, one department.
pub trait Scoped {
    fn employee_id(&self) -> &str;

    /// Department carried on the record itself, if any.
    fn department(&self) -> Option<&str> {
        None
    }
}

impl Scoped for Employee {
    fn employee_id(&self) -> &str {
        &self.id
    }

    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Scoped for AttendanceRecord {
    fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

impl Scoped for LeaveRequest {
    fn employee_id(&self) -> &str {
        &self.employee_id
    }

    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Scoped for OvertimeRequest {
    fn employee_id(&self) -> &str {
        &self.employee_id
    }

    fn department(&self) -> Option<&str> {
        Some(&self.department)
    }
}

impl Scoped for ProgressReport {
    fn employee_id(&self) -> &str {
        &self.employee_id
    }
}

/// Decides which records a user may see.
///
/// Records without a department of their own (attendance, progress reports)
/// take the department of their employee from the roster given at
/// construction.
#[derive(Clone, Debug, Default)]
pub struct AccessFilter {
    departments: HashMap<String, String>,
}

impl AccessFilter {
    #[must_use]
    pub fn new(employees: &[Employee]) -> Self {
        let departments = employees
            .iter()
            .map(|employee| (employee.id.clone(), employee.department.clone()))
            .collect();
        Self { departments }
    }

    fn department_of<'a, T: Scoped>(&'a self, record: &'a T) -> Option<&'a str> {
        record
            .department()
            .or_else(|| self.departments.get(record.employee_id()).map(String::as_str))
    }

    /// Whether `user` may see `record`.
    pub fn belongs_to_scope<T: Scoped>(&self, record: &T, user: &User) -> bool {
        match user.role {
            Role::Hr => true,
            Role::Manager => self.department_of(record) == Some(user.department.as_str()),
            Role::Employee => record.employee_id() == user.id,
        }
    }

    /// Copies of the records in `records` that `user` may see, in input order.
    pub fn scoped<T: Scoped + Clone>(&self, records: &[T], user: &User) -> Vec<T> {
        records
            .iter()
            .filter(|record| self.belongs_to_scope(*record, user))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;
