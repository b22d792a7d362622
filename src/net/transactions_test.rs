use super::*;

#[test]
fn transaction_endpoint_formats_expected_path() {
    assert_eq!(transaction_endpoint(7), "/transactions/7");
}
