use super::*;

#[test]
fn api_url_joins_base_and_path() {
    let url = api_url("/auth/me");
    assert!(url.ends_with("/auth/me"));
    assert!(!url.contains("//auth"));
}

#[test]
fn extract_detail_reads_structured_message() {
    let body = r#"{"detail": "Incorrect email or password"}"#;
    assert_eq!(
        extract_detail(body).as_deref(),
        Some("Incorrect email or password")
    );
}

#[test]
fn extract_detail_ignores_non_string_detail() {
    assert_eq!(extract_detail(r#"{"detail": 42}"#), None);
    assert_eq!(extract_detail(r#"{"message": "nope"}"#), None);
}

#[test]
fn extract_detail_tolerates_garbage_bodies() {
    assert_eq!(extract_detail(""), None);
    assert_eq!(extract_detail("<html>Bad Gateway</html>"), None);
}

#[test]
fn login_and_register_bypass_session_expiry() {
    assert!(bypasses_session_expiry("/auth/login"));
    assert!(bypasses_session_expiry("/auth/register"));
}

#[test]
fn other_paths_do_not_bypass_session_expiry() {
    assert!(!bypasses_session_expiry("/auth/me"));
    assert!(!bypasses_session_expiry("/accounts"));
    assert!(!bypasses_session_expiry("/transactions"));
}

#[test]
fn encode_form_escapes_reserved_characters() {
    let body = encode_form(&[("username", "a@b.com"), ("password", "p&ss w=rd")]);
    assert_eq!(body, "username=a%40b.com&password=p%26ss+w%3Drd");
}

#[test]
fn with_query_appends_pairs() {
    let path = with_query(
        "/transactions",
        &[("account_id", "3".to_owned()), ("limit", "50".to_owned())],
    );
    assert_eq!(path, "/transactions?account_id=3&limit=50");
}

#[test]
fn with_query_without_pairs_leaves_path_unchanged() {
    assert_eq!(with_query("/balances/snapshots", &[]), "/balances/snapshots");
}

#[test]
fn status_error_exposes_status_and_detail() {
    let err = ApiError::Status {
        status: 400,
        detail: Some("Email already registered".to_owned()),
    };
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.detail(), Some("Email already registered"));
}

#[test]
fn transport_errors_carry_no_status_or_detail() {
    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(err.status(), None);
    assert_eq!(err.detail(), None);
    assert_eq!(ApiError::Timeout.status(), None);
}
