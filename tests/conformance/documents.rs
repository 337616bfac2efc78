//! Whole documents in REST JSON form

use firevalue::{
    DecodedValue, DecoderConfig, DocumentHandle, Firestore, FirestoreDecoder, GeoPoint,
    ModernFlavor, ServerTimestampBehavior, Timestamp, WireValue,
};
use std::sync::Arc;

use crate::{classic_decoder, full_decoder};

fn order_document() -> WireValue {
    WireValue::from_json(serde_json::json!({
        "mapValue": {"fields": {
            "id": {"integerValue": "9007199254740993"},
            "total": {"doubleValue": 19.5},
            "paid": {"booleanValue": false},
            "note": {"nullValue": null},
            "placed": {"timestampValue": "2024-01-02T03:04:05.123456Z"},
            "store": {"geoPointValue": {"latitude": 52.5, "longitude": 13.4}},
            "customer": {"referenceValue": "projects/P/databases/D/documents/customers/c1"},
            "embedding": {"mapValue": {"fields": {
                "__type__": {"stringValue": "__vector__"},
                "value": {"arrayValue": {"values": [{"doubleValue": 0.25}, {"doubleValue": -1}]}}
            }}},
            "lines": {"arrayValue": {"values": [
                {"mapValue": {"fields": {
                    "sku": {"stringValue": "A-1"},
                    "qty": {"integerValue": "2"}
                }}}
            ]}},
            "updated": {"mapValue": {"fields": {
                "__type__": {"stringValue": "server_timestamp"},
                "__local_write_time__": {"timestampValue": "2024-01-02T03:04:06Z"}
            }}}
        }}
    }))
    .unwrap()
}

#[test]
fn decodes_every_field_kind() {
    let (d, sink) = full_decoder();
    let decoded = d
        .decode(&order_document(), ServerTimestampBehavior::Estimate)
        .unwrap();
    let fields = decoded.as_map().unwrap();

    assert_eq!(fields["id"].as_integer(), Some(9_007_199_254_740_993));
    assert_eq!(fields["total"].as_double(), Some(19.5));
    assert_eq!(fields["paid"].as_bool(), Some(false));
    assert!(fields["note"].is_null());
    assert_eq!(
        fields["placed"].as_timestamp(),
        Some(Timestamp::parse_rfc3339("2024-01-02T03:04:05.123456Z").unwrap())
    );
    assert_eq!(
        fields["store"].as_geo_point(),
        Some(GeoPoint::new(52.5, 13.4).unwrap())
    );
    assert_eq!(
        fields["customer"].as_reference().map(|r| r.path()),
        Some("customers/c1".to_string())
    );
    assert_eq!(fields["embedding"].as_vector(), Some([0.25, -1.0].as_slice()));

    let line = fields["lines"].as_array().unwrap()[0].as_map().unwrap();
    assert_eq!(line["sku"].as_str(), Some("A-1"));
    assert_eq!(line["qty"].as_integer(), Some(2));

    assert_eq!(
        fields["updated"].as_timestamp(),
        Some(Timestamp::parse_rfc3339("2024-01-02T03:04:06Z").unwrap())
    );
    assert!(sink.is_empty());
}

#[test]
fn top_level_fields_decode_through_decode_fields() {
    let (d, _) = classic_decoder();
    let document = order_document();
    let map = document.as_map().unwrap();

    let fields = d.decode_fields(map, ServerTimestampBehavior::None).unwrap();
    assert_eq!(fields.len(), map.fields.len());
    assert!(fields["updated"].is_null());
    assert!(matches!(fields["lines"], DecodedValue::Array(_)));
}

#[test]
fn json_projection_of_a_document() {
    let (d, _) = full_decoder();
    let json = d
        .decode(&order_document(), ServerTimestampBehavior::None)
        .unwrap()
        .to_json();

    assert_eq!(json["paid"], false);
    assert_eq!(json["customer"], "customers/c1");
    assert_eq!(json["lines"][0]["sku"], "A-1");
    assert_eq!(json["updated"], serde_json::Value::Null);
}

#[test]
fn config_driven_default_behavior() {
    let config = DecoderConfig::from_toml_str(
        r#"
project_id = "P"
database = "D"
server_timestamps = "estimate"
"#,
    )
    .unwrap();
    let client = Arc::new(Firestore::new(config.database_id().unwrap()));
    let decoder = FirestoreDecoder::from_config(ModernFlavor::new(client), &config);

    let decoded = decoder.decode_default(&order_document()).unwrap();
    assert!(decoded.as_map().unwrap()["updated"].as_timestamp().is_some());
}
