use leadcap_types::{ApiResult, PartialSaveAck, PartialSaveRequest};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── ApiResult accessors ───────────────────────────────────────────

#[test]
fn success_accessors() {
    let result = ApiResult::ok_with_message(42u32, "saved");
    assert!(result.is_success());
    assert!(!result.is_failure());
    assert_eq!(result.data(), Some(&42));
    assert_eq!(result.error(), None);
    assert_eq!(result.into_data(), Some(42));
}

#[test]
fn failure_accessors() {
    let result: ApiResult<u32> = ApiResult::fail("boom");
    assert!(result.is_failure());
    assert_eq!(result.data(), None);
    assert_eq!(result.error(), Some("boom"));
    assert_eq!(result.into_data(), None);
}

#[test]
fn map_transforms_success_only() {
    let ok = ApiResult::ok(2u32).map(|n| n * 10);
    assert_eq!(ok.data(), Some(&20));

    let err: ApiResult<u32> = ApiResult::fail("boom");
    let mapped = err.map(|n| n * 10);
    assert_eq!(mapped.error(), Some("boom"));
}

// ── Envelope serde shape ──────────────────────────────────────────

#[test]
fn success_serializes_with_success_tag() {
    let result = ApiResult::ok_with_message(json!({"lead_id": "L1"}), "saved");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({"success": true, "data": {"lead_id": "L1"}, "message": "saved"})
    );
}

#[test]
fn success_without_message_omits_field() {
    let result = ApiResult::ok(1u32);
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({"success": true, "data": 1}));
}

#[test]
fn failure_serializes_error_only() {
    let result: ApiResult<u32> = ApiResult::fail("not found");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({"success": false, "error": "not found"}));
}

#[test]
fn deserialize_success() {
    let result: ApiResult<u32> =
        serde_json::from_value(json!({"success": true, "data": 7})).unwrap();
    assert_eq!(result.data(), Some(&7));
}

#[test]
fn deserialize_failure_falls_back_to_message_field() {
    let result: ApiResult<u32> =
        serde_json::from_value(json!({"success": false, "message": "nope"})).unwrap();
    assert_eq!(result.error(), Some("nope"));
}

#[test]
fn deserialize_failure_without_any_message() {
    let result: ApiResult<u32> = serde_json::from_value(json!({"success": false})).unwrap();
    assert_eq!(result.error(), Some("request failed"));
}

#[test]
fn deserialize_success_without_data_is_an_error() {
    let result: Result<ApiResult<u32>, _> = serde_json::from_value(json!({"success": true}));
    assert!(result.is_err());
}

// ── Wire messages ─────────────────────────────────────────────────

#[test]
fn partial_save_request_shape() {
    let request = PartialSaveRequest::new(
        [("telefone", "11999998888")].into_iter().collect(),
        None,
    );
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({"data": {"telefone": "11999998888"}, "partial_lead_id": null})
    );
}

#[test]
fn partial_save_ack_with_and_without_lead() {
    let ack: PartialSaveAck = serde_json::from_value(json!({"lead_id": "L1"})).unwrap();
    assert_eq!(ack, PartialSaveAck::assigned("L1"));

    let ack: PartialSaveAck = serde_json::from_value(json!({})).unwrap();
    assert_eq!(ack, PartialSaveAck::unassigned());
}
