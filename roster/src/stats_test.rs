use super::*;

fn sample() -> Dataset {
    Dataset::sample().expect("bundled fixture parses")
}

#[test]
fn workforce_summary_counts_sample() {
    let summary = workforce_summary(&sample());
    assert_eq!(
        summary,
        WorkforceSummary {
            total_employees: 8,
            regular: 6,
            probationary: 1,
            resigned: 1,
            pending_leaves: 3,
            pending_overtime: 2,
            total_payroll: 154_000,
        }
    );
}

#[test]
fn department_headcount_orders_largest_first() {
    let counts = department_headcount(&sample().employees);
    assert_eq!(
        counts,
        [
            ("Engineering".to_owned(), 5),
            ("Human Resources".to_owned(), 1),
            ("Marketing".to_owned(), 1),
            ("Finance".to_owned(), 1),
        ]
    );
}

#[test]
fn attendance_summary_ignores_leave_days() {
    let summary = attendance_summary(&sample().attendance);
    assert_eq!(
        summary,
        AttendanceSummary {
            present: 5,
            late: 2,
            absent: 1
        }
    );
}

#[test]
fn request_summary_counts_each_status() {
    let data = sample();
    assert_eq!(
        request_summary(&data.leave_requests),
        RequestSummary {
            total: 4,
            pending: 3,
            approved: 1,
            rejected: 0
        }
    );
    let empty: [OvertimeRequest; 0] = [];
    assert_eq!(request_summary(&empty), RequestSummary::default());
}

#[test]
fn approved_overtime_sums_hours() {
    let data = sample();
    assert!((approved_overtime_hours(&data.overtime_requests) - 2.0).abs() < f64::EPSILON);
}

#[test]
fn progress_summary_totals_tasks_and_hours() {
    let summary = progress_summary(&sample().progress_reports);
    assert_eq!(summary.reports, 3);
    assert_eq!(summary.tasks_completed, 6);
    assert!((summary.hours_logged - 24.5).abs() < f64::EPSILON);
}
