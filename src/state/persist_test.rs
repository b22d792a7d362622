use super::*;

fn sample_user_json() -> String {
    serde_json::json!({
        "id": 7,
        "email": "bob@example.com",
        "username": "bob",
        "first_name": null,
        "last_name": null,
        "is_active": true,
        "is_verified": true,
        "created_at": "2024-03-01T12:00:00Z",
        "updated_at": "2024-03-02T12:00:00Z",
    })
    .to_string()
}

#[test]
fn resolve_restore_accepts_valid_token_and_user() {
    let decision = resolve_restore(Some("tok-9".to_owned()), Some(sample_user_json()));
    match decision {
        RestoreDecision::Restore { user, token } => {
            assert_eq!(user.id, 7);
            assert_eq!(user.username, "bob");
            assert_eq!(token, "tok-9");
        }
        other => panic!("expected Restore, got {other:?}"),
    }
}

#[test]
fn resolve_restore_discards_corrupt_user_record() {
    let decision = resolve_restore(Some("tok-9".to_owned()), Some("{not json".to_owned()));
    assert_eq!(decision, RestoreDecision::Discard);
}

#[test]
fn resolve_restore_discards_token_without_user() {
    let decision = resolve_restore(Some("tok-9".to_owned()), None);
    assert_eq!(decision, RestoreDecision::Discard);
}

#[test]
fn resolve_restore_discards_user_without_token() {
    let decision = resolve_restore(None, Some(sample_user_json()));
    assert_eq!(decision, RestoreDecision::Discard);
}

#[test]
fn resolve_restore_empty_when_nothing_persisted() {
    assert_eq!(resolve_restore(None, None), RestoreDecision::Empty);
}

#[test]
fn load_session_outside_browser_is_empty() {
    // Storage is a no-op in native builds, so nothing can ever be restored.
    assert_eq!(load_session(), RestoreDecision::Empty);
}
