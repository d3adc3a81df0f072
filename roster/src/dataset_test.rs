use super::*;
use crate::records::{AttendanceStatus, EmployeeStatus, LeaveType, RequestStatus};

#[test]
fn sample_loads_every_collection() {
    let data = Dataset::sample().expect("bundled fixture parses");
    assert_eq!(data.employees.len(), 8);
    assert_eq!(data.attendance.len(), 9);
    assert_eq!(data.leave_requests.len(), 4);
    assert_eq!(data.overtime_requests.len(), 3);
    assert_eq!(data.progress_reports.len(), 3);
    assert_eq!(data.monthly_leaves.len(), 4);
}

#[test]
fn sample_preserves_typed_fields() {
    let data = Dataset::sample().expect("bundled fixture parses");
    let ahmed = data.employee("4").expect("employee 4 exists");
    assert_eq!(ahmed.status, EmployeeStatus::Probationary);
    assert_eq!(ahmed.salary, 15_000);

    let absent = &data.attendance[2];
    assert_eq!(absent.status, AttendanceStatus::Absent);
    assert_eq!(absent.time_in, None);
    assert_eq!(data.attendance[8].status, AttendanceStatus::OnLeave);

    assert_eq!(data.leave_requests[3].leave_type, LeaveType::Emergency);
    assert_eq!(data.overtime_requests[1].status, RequestStatus::Approved);
    assert!((data.progress_reports[0].hours_worked - 8.5).abs() < f64::EPSILON);
}

#[test]
fn employee_lookup_misses_unknown_ids() {
    let data = Dataset::sample().expect("bundled fixture parses");
    assert!(data.employee("99").is_none());
}

#[test]
fn unknown_status_is_rejected() {
    let json = r#"{
        "employees": [{
            "id": "1", "employee_number": "EMP001", "name": "A", "email": "a@x.qa",
            "department": "Ops", "position": "Lead", "status": "contractor",
            "join_date": "2024-01-01", "manager": "CEO", "salary": 1
        }],
        "attendance": [], "leave_requests": [], "overtime_requests": [], "progress_reports": []
    }"#;
    assert!(matches!(Dataset::from_json(json), Err(DataError::Parse(_))));
}

#[test]
fn monthly_leaves_are_optional() {
    let json = r#"{"employees": [], "attendance": [], "leave_requests": [],
        "overtime_requests": [], "progress_reports": []}"#;
    let data = Dataset::from_json(json).expect("minimal document parses");
    assert!(data.monthly_leaves.is_empty());
}
