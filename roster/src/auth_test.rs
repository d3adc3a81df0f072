use super::*;
use crate::role::Role;

fn directory() -> AccountDirectory {
    AccountDirectory::demo().expect("bundled accounts parse")
}

// =============================================================================
// hashing
// =============================================================================

#[test]
fn hash_secret_is_lowercase_hex_sha256() {
    let digest = hash_secret("password123");
    assert_eq!(
        digest,
        "ef92b778bafe771e89245b89ecbc08a44a4e166c06659911881f383d4473e94f"
    );
    assert_ne!(hash_secret("password124"), digest);
}

#[test]
fn normalize_identifier_trims_and_lowercases() {
    assert_eq!(normalize_identifier("  HR@Company.QA "), "hr@company.qa");
}

// =============================================================================
// verify
// =============================================================================

#[test]
fn demo_accounts_cover_every_role() {
    let directory = directory();
    let roles: Vec<Role> = directory.users().into_iter().map(|user| user.role).collect();
    assert_eq!(roles, [Role::Hr, Role::Manager, Role::Employee]);
}

#[test]
fn verify_accepts_known_pair() {
    let user = directory()
        .verify("hr@company.qa", "password123")
        .expect("valid credentials");
    assert_eq!(user.role, Role::Hr);
    assert_eq!(user.name, "Sarah Al-Thani");
}

#[test]
fn verify_ignores_identifier_case() {
    let user = directory().verify("Employee@Company.qa", "password123");
    assert_eq!(user.map(|user| user.id).as_deref(), Some("3"));
}

#[test]
fn verify_rejects_wrong_secret_and_unknown_identifier() {
    let directory = directory();
    assert!(directory.verify("hr@company.qa", "wrongpass").is_none());
    assert!(directory.verify("ceo@company.qa", "password123").is_none());
    assert!(directory.verify("hr@company.qa", "PASSWORD123").is_none());
}

// =============================================================================
// loading
// =============================================================================

#[test]
fn unknown_role_fails_at_load() {
    let json = r#"[{"user": {"id": "9", "email": "x@company.qa", "name": "X",
        "role": "admin", "employee_number": "EMP009", "department": "Ops"},
        "secret_sha256": "00"}]"#;
    assert!(matches!(AccountDirectory::from_json(json), Err(AccountError::Parse(_))));
}

#[test]
fn duplicate_identifiers_are_rejected() {
    let user = User {
        id: "1".to_owned(),
        email: "a@company.qa".to_owned(),
        name: "A".to_owned(),
        role: Role::Hr,
        employee_number: "EMP001".to_owned(),
        department: "Ops".to_owned(),
    };
    let mut twin = user.clone();
    twin.email = "A@COMPANY.QA".to_owned();
    let result = AccountDirectory::new([Account::new(user, "x"), Account::new(twin, "y")]);
    assert!(matches!(result, Err(AccountError::Duplicate(key)) if key == "a@company.qa"));
}
