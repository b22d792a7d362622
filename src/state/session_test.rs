use super::*;

fn sample_user() -> User {
    User {
        id: 1,
        email: "alice@example.com".to_owned(),
        username: "alice".to_owned(),
        first_name: Some("Alice".to_owned()),
        last_name: Some("Doe".to_owned()),
        is_active: true,
        is_verified: false,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

fn authenticated_state() -> SessionState {
    let mut state = SessionState::default();
    state.complete_login(sample_user(), "tok-1".to_owned());
    state
}

#[test]
fn session_defaults_to_empty_unauthenticated() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_attempt_sets_loading_and_clears_stale_error() {
    let mut state = SessionState {
        error: Some("Login failed".to_owned()),
        ..SessionState::default()
    };
    state.begin_attempt();
    assert!(state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn complete_login_adopts_identity() {
    let mut state = SessionState::default();
    state.begin_attempt();
    state.complete_login(sample_user(), "tok-1".to_owned());

    assert_eq!(state.user, Some(sample_user()));
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn fail_login_from_empty_leaves_no_identity() {
    let mut state = SessionState::default();
    state.begin_attempt();
    state.fail_login("Incorrect email or password".to_owned());

    assert!(state.user.is_none());
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert_eq!(state.error.as_deref(), Some("Incorrect email or password"));
}

#[test]
fn fail_login_clears_authenticated_flag() {
    let mut state = authenticated_state();
    state.begin_attempt();
    state.fail_login("Login failed".to_owned());
    assert!(!state.is_authenticated);
}

#[test]
fn registration_stores_profile_but_never_authenticates() {
    let mut state = SessionState::default();
    state.begin_attempt();
    state.complete_registration(sample_user());

    assert_eq!(state.user, Some(sample_user()));
    assert!(state.token.is_none());
    assert!(!state.is_authenticated);
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn fail_registration_keeps_existing_session() {
    let mut state = authenticated_state();
    state.begin_attempt();
    state.fail_registration("Email already registered".to_owned());

    assert!(state.is_authenticated);
    assert_eq!(state.error.as_deref(), Some("Email already registered"));
    assert!(!state.is_loading);
}

#[test]
fn reset_returns_to_default_and_is_idempotent() {
    let mut state = authenticated_state();
    state.error = Some("stale".to_owned());
    state.is_loading = true;

    state.reset();
    assert_eq!(state, SessionState::default());

    state.reset();
    assert_eq!(state, SessionState::default());
}

#[test]
fn restore_marks_authenticated_without_touching_transients() {
    let mut state = SessionState::default();
    state.restore(sample_user(), "tok-1".to_owned());

    assert!(state.is_authenticated);
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(!state.is_loading);
    assert!(state.error.is_none());
}

#[test]
fn merge_user_patches_only_given_fields() {
    let mut state = authenticated_state();
    state.merge_user(&UserPatch {
        first_name: Some("Alicia".to_owned()),
        ..UserPatch::default()
    });

    let user = state.user.expect("user present");
    assert_eq!(user.first_name.as_deref(), Some("Alicia"));
    assert_eq!(user.last_name.as_deref(), Some("Doe"));
    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.username, "alice");
    assert!(user.is_active);
    assert!(!user.is_verified);
}

#[test]
fn merge_user_without_user_is_noop() {
    let mut state = SessionState::default();
    state.merge_user(&UserPatch {
        first_name: Some("X".to_owned()),
        ..UserPatch::default()
    });
    assert!(state.user.is_none());
}

#[test]
fn snapshot_carries_only_the_durable_subset() {
    let mut state = authenticated_state();
    state.is_loading = true;
    state.error = Some("transient".to_owned());

    assert_eq!(
        state.snapshot(),
        PersistedSession {
            user: Some(sample_user()),
            token: Some("tok-1".to_owned()),
            is_authenticated: true,
        }
    );
}

#[test]
fn persisted_session_round_trips_through_json() {
    let snapshot = authenticated_state().snapshot();
    let raw = serde_json::to_string(&snapshot).expect("serialize");
    let back: PersistedSession = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, snapshot);
}
