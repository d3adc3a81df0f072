use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  hr@company.qa ", "password123"),
        Ok(("hr@company.qa".to_owned(), "password123".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("hr@company.qa", " pass "),
        Ok(("hr@company.qa".to_owned(), " pass ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "x"), Err(LoginError::MissingCredentials));
    assert_eq!(validate_login_input("   ", "x"), Err(LoginError::MissingCredentials));
    assert_eq!(validate_login_input("hr@company.qa", ""), Err(LoginError::MissingCredentials));
}

#[test]
fn demo_accounts_cover_each_role() {
    let labels: Vec<&str> = DEMO_ACCOUNTS.iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["HR Manager", "Department Manager", "Employee"]);
}
