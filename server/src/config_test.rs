use super::*;

// =============================================================================
// parse_port
// =============================================================================

#[test]
fn parse_port_defaults_when_unset_or_blank() {
    assert_eq!(parse_port(None).unwrap(), DEFAULT_PORT);
    assert_eq!(parse_port(Some("  ")).unwrap(), DEFAULT_PORT);
}

#[test]
fn parse_port_accepts_valid_numbers() {
    assert_eq!(parse_port(Some("8080")).unwrap(), 8080);
    assert_eq!(parse_port(Some(" 443 ")).unwrap(), 443);
}

#[test]
fn parse_port_rejects_garbage() {
    let err = parse_port(Some("eighty")).unwrap_err();
    assert_eq!(err.to_string(), "configuration error: invalid PORT: eighty");
    assert!(parse_port(Some("70000")).is_err());
}

// =============================================================================
// from_env
// =============================================================================

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_server_env() {
    unsafe {
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_env_defaults_and_overrides() {
    unsafe { clear_server_env() };
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg, ServerConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
    assert_eq!(cfg.addr(), "127.0.0.1:3000");

    unsafe {
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "8081");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.addr(), "0.0.0.0:8081");

    unsafe { clear_server_env() };
}
