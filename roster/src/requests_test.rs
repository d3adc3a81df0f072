use super::*;
use crate::dataset::Dataset;

fn sample() -> Dataset {
    Dataset::sample().expect("bundled fixture parses")
}

fn fatima() -> User {
    User {
        id: "3".to_owned(),
        email: "employee@company.qa".to_owned(),
        name: "Fatima Hassan".to_owned(),
        role: Role::Employee,
        employee_number: "EMP003".to_owned(),
        department: "Engineering".to_owned(),
    }
}

// =============================================================================
// decisions
// =============================================================================

#[test]
fn pending_requests_can_be_decided_once() {
    assert_eq!(RequestStatus::Pending.decide(Decision::Approve), Ok(RequestStatus::Approved));
    assert_eq!(RequestStatus::Pending.decide(Decision::Reject), Ok(RequestStatus::Rejected));
    assert_eq!(
        RequestStatus::Approved.decide(Decision::Reject),
        Err(RequestError::AlreadyDecided(RequestStatus::Approved))
    );
}

#[test]
fn manager_approves_pending_leave() {
    let mut leaves = sample().leave_requests;
    let status = decide(&mut leaves, "1", Decision::Approve, Role::Manager);
    assert_eq!(status, Ok(RequestStatus::Approved));
    assert_eq!(leaves[0].status, RequestStatus::Approved);
}

#[test]
fn hr_cannot_decide_requests() {
    let mut overtime = sample().overtime_requests;
    assert_eq!(
        decide(&mut overtime, "1", Decision::Reject, Role::Hr),
        Err(RequestError::Forbidden)
    );
    assert_eq!(overtime[0].status, RequestStatus::Pending);
}

#[test]
fn deciding_unknown_or_decided_requests_fails() {
    let mut overtime = sample().overtime_requests;
    assert_eq!(
        decide(&mut overtime, "42", Decision::Approve, Role::Manager),
        Err(RequestError::NotFound("42".to_owned()))
    );
    assert_eq!(
        decide(&mut overtime, "2", Decision::Reject, Role::Manager),
        Err(RequestError::AlreadyDecided(RequestStatus::Approved))
    );
}

#[test]
fn next_id_skips_past_the_largest() {
    assert_eq!(next_id(["1", "7", "3"]), 8);
    assert_eq!(next_id(Vec::<&str>::new()), 1);
    assert_eq!(next_id(["x"]), 1);
}

// =============================================================================
// leave drafts
// =============================================================================

#[test]
fn leave_draft_counts_days_inclusively() {
    let data = sample();
    let draft = LeaveDraft {
        leave_type: LeaveType::Annual,
        start_date: "2025-02-10".to_owned(),
        end_date: "2025-02-12".to_owned(),
        reason: " Trip ".to_owned(),
    };
    let request = draft
        .submit(&fatima(), &data.leave_requests, "2025-01-21")
        .expect("valid draft");
    assert_eq!(request.id, "5");
    assert_eq!(request.days, 3);
    assert_eq!(request.reason, "Trip");
    assert_eq!(request.status, RequestStatus::Pending);
    assert_eq!(request.department, "Engineering");
    assert_eq!(request.applied_date, "2025-01-21");
}

#[test]
fn leave_draft_rejects_reversed_dates() {
    let draft = LeaveDraft {
        leave_type: LeaveType::Sick,
        start_date: "2025-02-12".to_owned(),
        end_date: "2025-02-10".to_owned(),
        reason: "Flu".to_owned(),
    };
    assert_eq!(draft.submit(&fatima(), &[], "2025-01-21"), Err(DraftError::EndBeforeStart));
}

#[test]
fn leave_draft_requires_dates_and_reason() {
    let mut draft = LeaveDraft {
        leave_type: LeaveType::Sick,
        start_date: String::new(),
        end_date: "2025-02-10".to_owned(),
        reason: "Flu".to_owned(),
    };
    assert_eq!(
        draft.clone().submit(&fatima(), &[], "2025-01-21"),
        Err(DraftError::Missing("Start date"))
    );
    draft.start_date = "10/02/2025".to_owned();
    assert_eq!(
        draft.clone().submit(&fatima(), &[], "2025-01-21"),
        Err(DraftError::InvalidDate("10/02/2025".to_owned()))
    );
    draft.start_date = "2025-02-10".to_owned();
    draft.reason = "  ".to_owned();
    assert_eq!(draft.submit(&fatima(), &[], "2025-01-21"), Err(DraftError::Missing("Reason")));
}

// =============================================================================
// overtime drafts
// =============================================================================

#[test]
fn overtime_draft_parses_fractional_hours() {
    let data = sample();
    let draft = OvertimeDraft {
        date: "2025-01-23".to_owned(),
        hours: "2.5".to_owned(),
        reason: "Release".to_owned(),
    };
    let request = draft
        .submit(&fatima(), &data.overtime_requests, "2025-01-22")
        .expect("valid draft");
    assert_eq!(request.id, "4");
    assert!((request.hours - 2.5).abs() < f64::EPSILON);
}

#[test]
fn overtime_draft_bounds_hours() {
    for hours in ["0", "-1", "25", "lots"] {
        let draft = OvertimeDraft {
            date: "2025-01-23".to_owned(),
            hours: hours.to_owned(),
            reason: "Release".to_owned(),
        };
        assert_eq!(
            draft.submit(&fatima(), &[], "2025-01-22"),
            Err(DraftError::InvalidHours),
            "hours {hours}"
        );
    }
}

// =============================================================================
// employee drafts
// =============================================================================

#[test]
fn employee_draft_assigns_next_number() {
    let data = sample();
    let draft = EmployeeDraft {
        name: "Yousef Saleh".to_owned(),
        email: "Yousef@Company.qa".to_owned(),
        position: "Analyst".to_owned(),
        salary: "16000".to_owned(),
        ..EmployeeDraft::default()
    };
    let employee = draft.submit(&data.employees, "2025-01-21").expect("valid draft");
    assert_eq!(employee.id, "9");
    assert_eq!(employee.employee_number, "EMP009");
    assert_eq!(employee.email, "yousef@company.qa");
    assert_eq!(employee.department, "Engineering");
    assert_eq!(employee.status, EmployeeStatus::Probationary);
    assert_eq!(employee.manager, "TBD");
    assert_eq!(employee.join_date, "2025-01-21");
}

#[test]
fn employee_draft_validates_fields() {
    let base = EmployeeDraft {
        name: "Yousef".to_owned(),
        email: "yousef@company.qa".to_owned(),
        position: "Analyst".to_owned(),
        salary: "16000".to_owned(),
        ..EmployeeDraft::default()
    };
    let bad_email = EmployeeDraft {
        email: "yousef".to_owned(),
        ..base.clone()
    };
    assert_eq!(bad_email.submit(&[], "2025-01-21"), Err(DraftError::InvalidEmail));
    let bad_department = EmployeeDraft {
        department: "Legal".to_owned(),
        ..base.clone()
    };
    assert_eq!(
        bad_department.submit(&[], "2025-01-21"),
        Err(DraftError::UnknownDepartment("Legal".to_owned()))
    );
    let bad_salary = EmployeeDraft {
        salary: "16k".to_owned(),
        ..base
    };
    assert_eq!(bad_salary.submit(&[], "2025-01-21"), Err(DraftError::InvalidSalary));
}

// =============================================================================
// password change
// =============================================================================

#[test]
fn password_change_requires_matching_confirmation() {
    let mut change = PasswordChange {
        current: "password123".to_owned(),
        new: "n3w-secret".to_owned(),
        confirm: "n3w-secreT".to_owned(),
    };
    assert_eq!(change.validate(), Err(DraftError::PasswordMismatch));
    assert_eq!(
        DraftError::PasswordMismatch.to_string(),
        "Passwords do not match"
    );
    change.confirm = change.new.clone();
    assert_eq!(change.validate(), Ok(()));
    change.current.clear();
    assert_eq!(change.validate(), Err(DraftError::Missing("Current password")));
}
