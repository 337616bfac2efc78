//! Contract violations abort the whole call

use firevalue::{Error, ServerTimestampBehavior, WireValue};

use crate::{full_decoder, lite_decoder};

const NONE: ServerTimestampBehavior = ServerTimestampBehavior::None;

#[test]
fn reference_without_documents_segment_fails() {
    let (d, sink) = full_decoder();
    let value = WireValue::from(vec![
        WireValue::from("ok"),
        WireValue::reference("projects/P/databases/D/coll/doc"),
    ]);

    let err = d.decode(&value, NONE).unwrap_err();
    assert!(matches!(err, Error::InvalidResourceName(_)));
    assert!(err.is_contract_violation());
    assert!(sink.is_empty());
}

#[test]
fn foreign_reference_before_failure_is_still_reported() {
    let (d, sink) = lite_decoder();
    let value = WireValue::from(vec![
        WireValue::reference("projects/P/databases/D2/documents/a/b"),
        WireValue::reference("projects/P/databases/D/documents/a"),
    ]);
    assert!(d.decode(&value, NONE).is_err());
    assert_eq!(sink.len(), 1);
}

#[test]
fn unknown_wire_tag_is_rejected_at_ingestion() {
    let err = WireValue::from_json(serde_json::json!({"fancyValue": 1})).unwrap_err();
    assert!(matches!(err, Error::InvalidValue(_)));
}

#[test]
fn malformed_payloads_fail_decoding() {
    let (d, _) = full_decoder();
    for json in [
        serde_json::json!({"integerValue": "twelve"}),
        serde_json::json!({"timestampValue": "yesterday"}),
        serde_json::json!({"bytesValue": "***"}),
        serde_json::json!({"geoPointValue": {"latitude": 91.0, "longitude": 0.0}}),
    ] {
        let value = WireValue::from_json(json.clone()).unwrap();
        let err = d.decode(&value, NONE).unwrap_err();
        assert!(err.is_contract_violation(), "{} gave {:?}", json, err);
    }
}

#[test]
fn max_value_sentinel_fails() {
    let (d, _) = full_decoder();
    let value = WireValue::from_json(serde_json::json!({
        "mapValue": {"fields": {"__type__": {"stringValue": "__max__"}}}
    }))
    .unwrap();
    assert!(matches!(d.decode(&value, NONE), Err(Error::InvalidValue(_))));
}

#[test]
fn failure_deep_in_a_map_fails_the_root() {
    let (d, _) = full_decoder();
    let value = WireValue::from_json(serde_json::json!({
        "mapValue": {"fields": {
            "a": {"mapValue": {"fields": {
                "b": {"arrayValue": {"values": [{"doubleValue": "not-a-number"}]}}
            }}}
        }}
    }))
    .unwrap();
    assert!(d.decode(&value, NONE).is_err());
}
