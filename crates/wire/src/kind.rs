//! Logical kind of a wire value
//!
//! `WireValue` tags are what the wire carries; `ValueKind` is what the value
//! means once map sentinels are recognized. The decoder dispatches on the
//! kind, not the tag.

use crate::sentinel::{
    sentinel_type, MAX_VALUE_SENTINEL, SERVER_TIMESTAMP_SENTINEL, VECTOR_SENTINEL,
};
use crate::value::WireValue;

/// Logical kind of a wire value, in cross-type sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ValueKind {
    /// null
    Null,
    /// true/false
    Boolean,
    /// integer or double
    Number,
    /// timestamp
    Timestamp,
    /// pending server timestamp
    ServerTimestamp,
    /// string
    String,
    /// bytes
    Bytes,
    /// document reference
    Reference,
    /// geo point
    GeoPoint,
    /// array
    Array,
    /// vector of doubles
    Vector,
    /// map
    Map,
    /// max-value sentinel, sorts after everything
    MaxValue,
}

impl ValueKind {
    /// Position in the wire format's cross-type ordering
    pub fn type_order(&self) -> u8 {
        match self {
            ValueKind::Null => 0,
            ValueKind::Boolean => 1,
            ValueKind::Number => 2,
            ValueKind::Timestamp => 3,
            ValueKind::ServerTimestamp => 4,
            ValueKind::String => 5,
            ValueKind::Bytes => 6,
            ValueKind::Reference => 7,
            ValueKind::GeoPoint => 8,
            ValueKind::Array => 9,
            ValueKind::Vector => 10,
            ValueKind::Map => 11,
            ValueKind::MaxValue => u8::MAX,
        }
    }
}

impl WireValue {
    /// Classify this value
    pub fn kind(&self) -> ValueKind {
        match self {
            WireValue::Null(_) => ValueKind::Null,
            WireValue::Boolean(_) => ValueKind::Boolean,
            WireValue::Integer(_) | WireValue::Double(_) => ValueKind::Number,
            WireValue::Timestamp(_) => ValueKind::Timestamp,
            WireValue::String(_) => ValueKind::String,
            WireValue::Bytes(_) => ValueKind::Bytes,
            WireValue::Reference(_) => ValueKind::Reference,
            WireValue::GeoPoint(_) => ValueKind::GeoPoint,
            WireValue::Array(_) => ValueKind::Array,
            WireValue::Map(map) => match sentinel_type(map) {
                Some(SERVER_TIMESTAMP_SENTINEL) => ValueKind::ServerTimestamp,
                Some(VECTOR_SENTINEL) => ValueKind::Vector,
                Some(MAX_VALUE_SENTINEL) => ValueKind::MaxValue,
                _ => ValueKind::Map,
            },
        }
    }
}
