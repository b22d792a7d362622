use super::*;

#[test]
fn should_redirect_unauth_when_not_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_login_in_flight() {
    let state = SessionState {
        is_loading: true,
        ..SessionState::default()
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = SessionState {
        is_authenticated: true,
        token: Some("tok-1".to_owned()),
        ..SessionState::default()
    };
    assert!(!should_redirect_unauth(&state));
}
