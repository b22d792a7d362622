use super::*;

#[test]
fn account_endpoint_formats_expected_path() {
    assert_eq!(account_endpoint(42), "/accounts/42");
}
