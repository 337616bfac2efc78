//! Wire value types
//!
//! This module defines:
//! - WireValue: the tagged union carried on the wire for every field value
//! - the payload types of the tags that are not plain scalars
//!
//! ## JSON Shape
//!
//! The serde representation is the REST JSON form, one key per value naming
//! the populated tag:
//!
//! ```json
//! {"integerValue": "42"}
//! {"mapValue": {"fields": {"a": {"booleanValue": true}}}}
//! {"referenceValue": "projects/p/databases/(default)/documents/coll/doc"}
//! ```
//!
//! Lossy spellings the backend is allowed to emit are kept verbatim here
//! (`Int64::Text`, `WireDouble::Text`, `WireBytes::Base64`, RFC 3339
//! timestamps). Turning them into native values is the job of
//! [`crate::normalize`].

use firevalue_core::{Error, Result};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A single field value as carried on the wire
///
/// Exactly one tag is populated; the enum makes anything else
/// unrepresentable. Server timestamps, vectors and the max-value sentinel
/// travel as `Map` values carrying a `__type__` field (see
/// [`crate::sentinel`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WireValue {
    /// Null
    #[serde(rename = "nullValue")]
    Null(NullValue),
    /// Boolean
    #[serde(rename = "booleanValue")]
    Boolean(bool),
    /// 64-bit integer
    #[serde(rename = "integerValue")]
    Integer(Int64),
    /// IEEE-754 double
    #[serde(rename = "doubleValue")]
    Double(WireDouble),
    /// Timestamp
    #[serde(rename = "timestampValue")]
    Timestamp(WireTimestamp),
    /// UTF-8 string
    #[serde(rename = "stringValue")]
    String(String),
    /// Byte sequence
    #[serde(rename = "bytesValue")]
    Bytes(WireBytes),
    /// Full resource name of a document
    #[serde(rename = "referenceValue")]
    Reference(String),
    /// Latitude/longitude pair
    #[serde(rename = "geoPointValue")]
    GeoPoint(LatLng),
    /// Ordered sequence of values
    #[serde(rename = "arrayValue")]
    Array(ArrayValue),
    /// String-keyed mapping of values
    #[serde(rename = "mapValue")]
    Map(MapValue),
}

impl WireValue {
    /// Parse a wire value from its JSON form
    ///
    /// A missing or unrecognized tag is a contract violation and maps to
    /// `Error::InvalidValue`.
    pub fn from_json(json: serde_json::Value) -> Result<Self> {
        serde_json::from_value(json).map_err(|e| Error::invalid_value(e.to_string()))
    }

    /// Parse a wire value from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::invalid_value(e.to_string()))
    }

    /// The null value
    pub fn null() -> Self {
        WireValue::Null(NullValue)
    }

    /// A reference value from a full resource name
    pub fn reference(name: impl Into<String>) -> Self {
        WireValue::Reference(name.into())
    }

    /// A geo point value
    pub fn geo_point(latitude: f64, longitude: f64) -> Self {
        WireValue::GeoPoint(LatLng {
            latitude,
            longitude,
        })
    }

    /// A timestamp value from seconds and nanos
    pub fn timestamp(seconds: i64, nanos: i32) -> Self {
        WireValue::Timestamp(WireTimestamp::from_parts(seconds, nanos))
    }

    /// Wire name of the populated tag
    pub fn tag_name(&self) -> &'static str {
        match self {
            WireValue::Null(_) => "nullValue",
            WireValue::Boolean(_) => "booleanValue",
            WireValue::Integer(_) => "integerValue",
            WireValue::Double(_) => "doubleValue",
            WireValue::Timestamp(_) => "timestampValue",
            WireValue::String(_) => "stringValue",
            WireValue::Bytes(_) => "bytesValue",
            WireValue::Reference(_) => "referenceValue",
            WireValue::GeoPoint(_) => "geoPointValue",
            WireValue::Array(_) => "arrayValue",
            WireValue::Map(_) => "mapValue",
        }
    }

    /// Get the map payload if this is a `Map` value
    pub fn as_map(&self) -> Option<&MapValue> {
        match self {
            WireValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Get the string payload if this is a `String` value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            WireValue::String(s) => Some(s),
            _ => None,
        }
    }
}

// ============================================================================
// Payload types
// ============================================================================

/// Payload of the null tag
///
/// The backend writes it as `null` or `"NULL_VALUE"`; both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullValue;

impl Serialize for NullValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str("NULL_VALUE")
    }
}

impl<'de> Deserialize<'de> for NullValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        IgnoredAny::deserialize(deserializer)?;
        Ok(NullValue)
    }
}

/// 64-bit integer as written on the wire
///
/// JSON encodings carry int64 as a decimal string; binary encodings as a
/// number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Int64 {
    /// Native number
    Number(i64),
    /// Decimal string
    Text(String),
}

impl Default for Int64 {
    fn default() -> Self {
        Int64::Number(0)
    }
}

/// Double as written on the wire
///
/// Non-finite values are spelled `"NaN"`, `"Infinity"` and `"-Infinity"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireDouble {
    /// Native number
    Number(f64),
    /// Textual spelling
    Text(String),
}

/// Timestamp as written on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum WireTimestamp {
    /// RFC 3339 string, e.g. `2021-01-01T00:00:00.123456Z`
    Rfc3339(String),
    /// Explicit seconds and nanos
    Parts {
        /// Seconds since Unix epoch
        #[serde(default)]
        seconds: Int64,
        /// Nanosecond fraction
        #[serde(default)]
        nanos: i32,
    },
}

impl WireTimestamp {
    /// Timestamp from seconds and nanos
    pub fn from_parts(seconds: i64, nanos: i32) -> Self {
        WireTimestamp::Parts {
            seconds: Int64::Number(seconds),
            nanos,
        }
    }
}

/// Byte sequence as written on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireBytes {
    /// Standard-alphabet base64 string (JSON encodings)
    Base64(String),
    /// Raw bytes
    Raw(Vec<u8>),
}

/// Latitude/longitude payload; missing coordinates are zero
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees
    #[serde(default)]
    pub latitude: f64,
    /// Longitude in degrees
    #[serde(default)]
    pub longitude: f64,
}

/// Array payload; a missing `values` list is an empty array
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayValue {
    /// Elements in order
    #[serde(default)]
    pub values: Vec<WireValue>,
}

/// Map payload; a missing `fields` set is an empty map
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapValue {
    /// Fields by name
    #[serde(default)]
    pub fields: HashMap<String, WireValue>,
}

impl MapValue {
    /// Look up a field
    pub fn get(&self, key: &str) -> Option<&WireValue> {
        self.fields.get(key)
    }
}

impl FromIterator<(String, WireValue)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (String, WireValue)>>(iter: I) -> Self {
        MapValue {
            fields: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// From implementations for ergonomic construction
// ============================================================================

impl From<bool> for WireValue {
    fn from(b: bool) -> Self {
        WireValue::Boolean(b)
    }
}

impl From<i64> for WireValue {
    fn from(i: i64) -> Self {
        WireValue::Integer(Int64::Number(i))
    }
}

impl From<f64> for WireValue {
    fn from(f: f64) -> Self {
        WireValue::Double(WireDouble::Number(f))
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        WireValue::String(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        WireValue::String(s)
    }
}

impl From<Vec<u8>> for WireValue {
    fn from(b: Vec<u8>) -> Self {
        WireValue::Bytes(WireBytes::Raw(b))
    }
}

impl From<Vec<WireValue>> for WireValue {
    fn from(values: Vec<WireValue>) -> Self {
        WireValue::Array(ArrayValue { values })
    }
}

impl From<MapValue> for WireValue {
    fn from(m: MapValue) -> Self {
        WireValue::Map(m)
    }
}

impl From<HashMap<String, WireValue>> for WireValue {
    fn from(fields: HashMap<String, WireValue>) -> Self {
        WireValue::Map(MapValue { fields })
    }
}
