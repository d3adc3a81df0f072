use super::*;

#[test]
fn submission_notice_reports_success() {
    assert_eq!(
        submission_notice(RequestForm::Leave, &Ok(())),
        "Leave request submitted successfully"
    );
    assert_eq!(
        submission_notice(RequestForm::Overtime, &Ok(())),
        "Overtime request submitted successfully"
    );
}

#[test]
fn submission_notice_surfaces_validation_errors() {
    assert_eq!(
        submission_notice(RequestForm::Overtime, &Err(DraftError::InvalidHours)),
        "Hours must be greater than 0 and at most 24"
    );
    assert_eq!(
        submission_notice(RequestForm::Leave, &Err(DraftError::Missing("Reason"))),
        "Reason is required"
    );
}
