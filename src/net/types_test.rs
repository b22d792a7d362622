use super::*;

#[test]
fn user_deserializes_with_null_names() {
    let raw = r#"{
        "id": 3,
        "email": "carol@example.com",
        "username": "carol",
        "first_name": null,
        "last_name": null,
        "is_active": true,
        "is_verified": false,
        "created_at": "2024-05-01T09:00:00Z",
        "updated_at": "2024-05-01T09:00:00Z"
    }"#;
    let user: User = serde_json::from_str(raw).expect("user parses");
    assert_eq!(user.id, 3);
    assert!(user.first_name.is_none());
    assert!(user.last_name.is_none());
}

#[test]
fn envelope_unwraps_wrapped_payload() {
    let raw = r#"{"data": {"date": "2024-06-01", "balance": 1200.5}}"#;
    let envelope: Envelope<NetWorthPoint> = serde_json::from_str(raw).expect("envelope parses");
    assert_eq!(envelope.data.date, "2024-06-01");
    assert!((envelope.data.balance - 1200.5).abs() < f64::EPSILON);
}

#[test]
fn token_response_parses_unwrapped_body() {
    let raw = r#"{"access_token": "tok-abc", "token_type": "bearer", "expires_in": 1800}"#;
    let token: TokenResponse = serde_json::from_str(raw).expect("token parses");
    assert_eq!(token.access_token, "tok-abc");
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.expires_in, 1800);
}

#[test]
fn account_maps_the_type_field() {
    let raw = r#"{
        "id": 1,
        "user_id": 2,
        "name": "Everyday",
        "type": "checking",
        "institution_name": null,
        "current_balance": 250.0,
        "available_balance": 240.0,
        "currency": "USD",
        "is_active": true,
        "is_archived": false,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    }"#;
    let account: Account = serde_json::from_str(raw).expect("account parses");
    assert_eq!(account.account_type, "checking");
}

#[test]
fn transaction_filter_emits_pairs_in_contract_order() {
    let filter = TransactionFilter {
        account_id: Some(3),
        start_date: Some("2024-01-01".to_owned()),
        end_date: Some("2024-02-01".to_owned()),
        category: Some("groceries".to_owned()),
        limit: Some(25),
        offset: Some(50),
    };
    assert_eq!(
        filter.query_pairs(),
        vec![
            ("account_id", "3".to_owned()),
            ("start_date", "2024-01-01".to_owned()),
            ("end_date", "2024-02-01".to_owned()),
            ("category", "groceries".to_owned()),
            ("limit", "25".to_owned()),
            ("offset", "50".to_owned()),
        ]
    );
}

#[test]
fn default_filters_emit_no_pairs() {
    assert!(TransactionFilter::default().query_pairs().is_empty());
    assert!(SnapshotFilter::default().query_pairs().is_empty());
}

#[test]
fn update_payloads_skip_absent_fields() {
    let update = AccountUpdate {
        name: Some("Renamed".to_owned()),
        ..AccountUpdate::default()
    };
    let value = serde_json::to_value(&update).expect("serializes");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("name"));
}
