use super::*;

fn sample_user(first_name: Option<&str>) -> User {
    User {
        id: 1,
        email: "alice@example.com".to_owned(),
        username: "alice".to_owned(),
        first_name: first_name.map(str::to_owned),
        last_name: None,
        is_active: true,
        is_verified: true,
        created_at: "2024-01-01T00:00:00Z".to_owned(),
        updated_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn display_name_prefers_first_name() {
    assert_eq!(display_name(&sample_user(Some("Alice"))), "Alice");
}

#[test]
fn display_name_falls_back_to_username() {
    assert_eq!(display_name(&sample_user(None)), "alice");
}
