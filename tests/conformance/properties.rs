//! Property-based checks of the decoding contract

use std::collections::HashMap;

use firevalue::{DecodedValue, ServerTimestampBehavior, Timestamp, WireValue};
use firevalue_wire::{server_timestamp, MapValue, WireTimestamp};
use proptest::prelude::*;

use crate::full_decoder;

// ============================================================================
// Strategies
// ============================================================================

fn leaf() -> impl Strategy<Value = WireValue> {
    prop_oneof![
        Just(WireValue::null()),
        any::<bool>().prop_map(WireValue::from),
        any::<i64>().prop_map(WireValue::from),
        (-1.0e12..1.0e12f64).prop_map(WireValue::from),
        "\\PC{0,12}".prop_map(WireValue::from),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(WireValue::from),
        (0i64..4_000_000_000, 0i32..1_000_000_000)
            .prop_map(|(s, n)| WireValue::timestamp(s, n)),
        (-90.0..=90.0f64, -180.0..=180.0f64).prop_map(|(lat, lng)| WireValue::geo_point(lat, lng)),
    ]
}

fn tree() -> impl Strategy<Value = WireValue> {
    leaf().prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(WireValue::from),
            prop::collection::hash_map("[a-z]{1,6}", inner, 0..6).prop_map(WireValue::from),
        ]
    })
}

fn behavior() -> impl Strategy<Value = ServerTimestampBehavior> {
    prop_oneof![
        Just(ServerTimestampBehavior::None),
        Just(ServerTimestampBehavior::Estimate),
        Just(ServerTimestampBehavior::Previous),
    ]
}

fn wrap(seconds: i64, previous: Option<WireValue>) -> WireValue {
    server_timestamp(WireTimestamp::from_parts(seconds, 0), previous)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn booleans_decode_verbatim(b in any::<bool>()) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&WireValue::from(b), ServerTimestampBehavior::None).unwrap();
        prop_assert_eq!(decoded.as_bool(), Some(b));
    }

    #[test]
    fn integers_decode_verbatim(i in any::<i64>()) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&WireValue::from(i), ServerTimestampBehavior::None).unwrap();
        prop_assert_eq!(decoded.as_integer(), Some(i));

        let text = WireValue::from_json(serde_json::json!({"integerValue": i.to_string()})).unwrap();
        let decoded = d.decode(&text, ServerTimestampBehavior::None).unwrap();
        prop_assert_eq!(decoded.as_integer(), Some(i));
    }

    #[test]
    fn doubles_decode_verbatim(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&WireValue::from(f), ServerTimestampBehavior::None).unwrap();
        prop_assert_eq!(decoded.as_double(), Some(f));
    }

    #[test]
    fn strings_decode_verbatim(s in "\\PC*") {
        let (d, _) = full_decoder();
        let decoded = d.decode(&WireValue::from(s.as_str()), ServerTimestampBehavior::None).unwrap();
        prop_assert_eq!(decoded.as_str(), Some(s.as_str()));
    }

    #[test]
    fn arrays_decode_elementwise(values in prop::collection::vec(tree(), 0..8), b in behavior()) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&WireValue::from(values.clone()), b).unwrap();
        let decoded = decoded.as_array().unwrap();
        prop_assert_eq!(decoded.len(), values.len());
        for (i, value) in values.iter().enumerate() {
            let expected = d.decode(value, b).unwrap();
            prop_assert_eq!(&decoded[i], &expected);
        }
    }

    #[test]
    fn maps_decode_fieldwise(fields in prop::collection::hash_map("[a-z]{1,6}", tree(), 0..8), b in behavior()) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&WireValue::from(fields.clone()), b).unwrap();
        let decoded = decoded.as_map().unwrap();
        prop_assert_eq!(decoded.len(), fields.len());
        for (key, value) in &fields {
            let expected = d.decode(value, b).unwrap();
            prop_assert_eq!(decoded.get(key), Some(&expected));
        }
    }

    #[test]
    fn none_behavior_is_always_null(seconds in 0i64..4_000_000_000, previous in prop::option::of(tree())) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&wrap(seconds, previous), ServerTimestampBehavior::None).unwrap();
        prop_assert!(decoded.is_null());
    }

    #[test]
    fn estimate_is_local_write_time(seconds in 0i64..4_000_000_000, previous in prop::option::of(tree())) {
        let (d, _) = full_decoder();
        let decoded = d.decode(&wrap(seconds, previous), ServerTimestampBehavior::Estimate).unwrap();
        prop_assert_eq!(decoded.as_timestamp(), Some(Timestamp::new(seconds, 0).unwrap()));
    }

    #[test]
    fn previous_chains_to_oldest_value(depth in 1usize..6, oldest in prop::option::of(leaf())) {
        let (d, _) = full_decoder();
        let mut value = wrap(0, oldest.clone());
        for level in 1..depth {
            value = wrap(level as i64, Some(value));
        }
        let decoded = d.decode(&value, ServerTimestampBehavior::Previous).unwrap();
        let expected = match &oldest {
            Some(v) => d.decode(v, ServerTimestampBehavior::Previous).unwrap(),
            None => DecodedValue::Null,
        };
        prop_assert_eq!(decoded, expected);
    }
}

#[test]
fn absent_fields_decode_to_empty_map() {
    let (d, _) = full_decoder();
    let value = WireValue::from_json(serde_json::json!({"mapValue": {}})).unwrap();
    let decoded = d.decode(&value, ServerTimestampBehavior::None).unwrap();
    assert_eq!(decoded.as_map(), Some(&HashMap::new()));
}

#[test]
fn empty_map_value_is_a_plain_map() {
    let (d, _) = full_decoder();
    let decoded = d
        .decode(&WireValue::Map(MapValue::default()), ServerTimestampBehavior::Estimate)
        .unwrap();
    assert!(decoded.as_map().unwrap().is_empty());
}
