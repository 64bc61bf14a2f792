//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn base_error() -> Error {
    Error::not_found("pet 9 not found")
}

#[rstest]
#[case(Error::not_found("missing"), ErrorCode::NotFound)]
#[case(Error::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(Error::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: Error, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
fn new_returns_none_when_trace_id_out_of_scope(base_error: Error) {
    assert!(base_error.trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid trace id");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn is_not_found_only_matches_not_found(base_error: Error) {
    assert!(base_error.is_not_found());
    assert!(!Error::internal("boom").is_not_found());
}

#[rstest]
fn serialises_camel_case_and_skips_empty_fields(base_error: Error) {
    let value = serde_json::to_value(base_error.with_trace_id("abc")).expect("serialise");
    assert_eq!(
        value,
        json!({ "code": "not_found", "message": "pet 9 not found", "traceId": "abc" })
    );
}

#[rstest]
fn display_uses_message(base_error: Error) {
    assert_eq!(base_error.to_string(), "pet 9 not found");
}
