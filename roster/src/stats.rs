//! Summary figures for dashboard cards.

use crate::dataset::Dataset;
use crate::records::{
    AttendanceRecord, AttendanceStatus, Employee, EmployeeStatus, OvertimeRequest, ProgressReport,
    RequestStatus,
};
use crate::requests::Request;

/// Headline numbers on the HR dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WorkforceSummary {
    pub total_employees: usize,
    pub regular: usize,
    pub probationary: usize,
    pub resigned: usize,
    pub pending_leaves: usize,
    pub pending_overtime: usize,
    /// Monthly basic salary of everyone not resigned.
    pub total_payroll: u64,
}

#[must_use]
pub fn workforce_summary(data: &Dataset) -> WorkforceSummary {
    let count = |status: EmployeeStatus| {
        data.employees
            .iter()
            .filter(|employee| employee.status == status)
            .count()
    };
    WorkforceSummary {
        total_employees: data.employees.len(),
        regular: count(EmployeeStatus::Regular),
        probationary: count(EmployeeStatus::Probationary),
        resigned: count(EmployeeStatus::Resigned),
        pending_leaves: request_summary(&data.leave_requests).pending,
        pending_overtime: request_summary(&data.overtime_requests).pending,
        total_payroll: data
            .employees
            .iter()
            .filter(|employee| employee.status != EmployeeStatus::Resigned)
            .map(|employee| u64::from(employee.salary))
            .sum(),
    }
}

/// Employees per department, largest first; ties keep first appearance order.
#[must_use]
pub fn department_headcount(employees: &[Employee]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for employee in employees {
        match counts.iter_mut().find(|(name, _)| *name == employee.department) {
            Some((_, count)) => *count += 1,
            None => counts.push((employee.department.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceSummary {
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

#[must_use]
pub fn attendance_summary(records: &[AttendanceRecord]) -> AttendanceSummary {
    let count = |status: AttendanceStatus| records.iter().filter(|r| r.status == status).count();
    AttendanceSummary {
        present: count(AttendanceStatus::Present),
        late: count(AttendanceStatus::Late),
        absent: count(AttendanceStatus::Absent),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

#[must_use]
pub fn request_summary<T: Request>(requests: &[T]) -> RequestSummary {
    let count = |status: RequestStatus| requests.iter().filter(|r| r.status() == status).count();
    RequestSummary {
        total: requests.len(),
        pending: count(RequestStatus::Pending),
        approved: count(RequestStatus::Approved),
        rejected: count(RequestStatus::Rejected),
    }
}

/// Hours across approved overtime requests.
#[must_use]
pub fn approved_overtime_hours(requests: &[OvertimeRequest]) -> f64 {
    requests
        .iter()
        .filter(|request| request.status == RequestStatus::Approved)
        .map(|request| request.hours)
        .sum()
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProgressSummary {
    pub reports: usize,
    pub tasks_completed: usize,
    pub hours_logged: f64,
}

#[must_use]
pub fn progress_summary(reports: &[ProgressReport]) -> ProgressSummary {
    ProgressSummary {
        reports: reports.len(),
        tasks_completed: reports.iter().map(|r| r.tasks_completed.len()).sum(),
        hours_logged: reports.iter().map(|r| r.hours_worked).sum(),
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;
