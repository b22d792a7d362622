use super::*;

#[test]
fn login_message_prefers_structured_detail() {
    let err = ApiError::Status {
        status: 401,
        detail: Some("Incorrect email or password".to_owned()),
    };
    assert_eq!(login_error_message(&err), "Incorrect email or password");
}

#[test]
fn login_message_falls_back_to_fixed_literal() {
    let err = ApiError::Status {
        status: 500,
        detail: None,
    };
    assert_eq!(login_error_message(&err), LOGIN_FAILED);

    let err = ApiError::Network("connection refused".to_owned());
    assert_eq!(login_error_message(&err), LOGIN_FAILED);

    assert_eq!(login_error_message(&ApiError::Timeout), LOGIN_FAILED);
}

#[test]
fn register_message_prefers_structured_detail() {
    let err = ApiError::Status {
        status: 400,
        detail: Some("Email already registered".to_owned()),
    };
    assert_eq!(register_error_message(&err), "Email already registered");
}

#[test]
fn register_message_falls_back_to_fixed_literal() {
    let err = ApiError::Decode("missing field `id`".to_owned());
    assert_eq!(register_error_message(&err), REGISTRATION_FAILED);
}
