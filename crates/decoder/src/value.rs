//! Decoded value type
//!
//! `DecodedValue<F>` mirrors the wire shape with native payloads. Bytes and
//! references use the types of flavor `F`.
//!
//! ### Type Rules
//!
//! - Different kinds are NEVER equal: `Integer(1) != Double(1.0)`
//! - `Blob` is not `String`
//! - Doubles use IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`
//! - Timestamps and server timestamps both decode to `Timestamp` (or null)

use crate::flavor::{DocumentHandle, Flavor};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use firevalue_core::{GeoPoint, Timestamp};
use std::collections::HashMap;

/// Native value produced by the decoder
#[derive(Debug, Clone)]
pub enum DecodedValue<F: Flavor> {
    /// Null, or a pending server timestamp without a usable substitute
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point (IEEE-754)
    Double(f64),
    /// Timestamp
    Timestamp(Timestamp),
    /// UTF-8 string
    String(String),
    /// Byte sequence in the flavor's blob type
    Blob(F::Blob),
    /// Document reference in the flavor's reference type
    Reference(F::Reference),
    /// Latitude/longitude pair
    GeoPoint(GeoPoint),
    /// Vector of doubles
    Vector(Vec<f64>),
    /// Ordered sequence of values
    Array(Vec<DecodedValue<F>>),
    /// String-keyed record
    Map(HashMap<String, DecodedValue<F>>),
}

// Custom PartialEq: float semantics, and F itself need not be comparable
impl<F: Flavor> PartialEq for DecodedValue<F> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DecodedValue::Null, DecodedValue::Null) => true,
            (DecodedValue::Boolean(a), DecodedValue::Boolean(b)) => a == b,
            (DecodedValue::Integer(a), DecodedValue::Integer(b)) => a == b,
            (DecodedValue::Double(a), DecodedValue::Double(b)) => a == b,
            (DecodedValue::Timestamp(a), DecodedValue::Timestamp(b)) => a == b,
            (DecodedValue::String(a), DecodedValue::String(b)) => a == b,
            (DecodedValue::Blob(a), DecodedValue::Blob(b)) => a == b,
            (DecodedValue::Reference(a), DecodedValue::Reference(b)) => a == b,
            (DecodedValue::GeoPoint(a), DecodedValue::GeoPoint(b)) => a == b,
            (DecodedValue::Vector(a), DecodedValue::Vector(b)) => a == b,
            (DecodedValue::Array(a), DecodedValue::Array(b)) => a == b,
            (DecodedValue::Map(a), DecodedValue::Map(b)) => {
                a.len() == b.len() && a.iter().all(|(k, v)| b.get(k) == Some(v))
            }
            _ => false,
        }
    }
}

impl<F: Flavor> DecodedValue<F> {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            DecodedValue::Null => "Null",
            DecodedValue::Boolean(_) => "Boolean",
            DecodedValue::Integer(_) => "Integer",
            DecodedValue::Double(_) => "Double",
            DecodedValue::Timestamp(_) => "Timestamp",
            DecodedValue::String(_) => "String",
            DecodedValue::Blob(_) => "Blob",
            DecodedValue::Reference(_) => "Reference",
            DecodedValue::GeoPoint(_) => "GeoPoint",
            DecodedValue::Vector(_) => "Vector",
            DecodedValue::Array(_) => "Array",
            DecodedValue::Map(_) => "Map",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, DecodedValue::Null)
    }

    /// Get as bool if this is a Boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DecodedValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Integer value
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            DecodedValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64 if this is a Double value
    pub fn as_double(&self) -> Option<f64> {
        match self {
            DecodedValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as Timestamp if this is a Timestamp value
    pub fn as_timestamp(&self) -> Option<Timestamp> {
        match self {
            DecodedValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the blob if this is a Blob value
    pub fn as_blob(&self) -> Option<&F::Blob> {
        match self {
            DecodedValue::Blob(b) => Some(b),
            _ => None,
        }
    }

    /// Get the reference if this is a Reference value
    pub fn as_reference(&self) -> Option<&F::Reference> {
        match self {
            DecodedValue::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Get as GeoPoint if this is a GeoPoint value
    pub fn as_geo_point(&self) -> Option<GeoPoint> {
        match self {
            DecodedValue::GeoPoint(p) => Some(*p),
            _ => None,
        }
    }

    /// Get the components if this is a Vector value
    pub fn as_vector(&self) -> Option<&[f64]> {
        match self {
            DecodedValue::Vector(v) => Some(v),
            _ => None,
        }
    }

    /// Get as a slice if this is an Array value
    pub fn as_array(&self) -> Option<&[DecodedValue<F>]> {
        match self {
            DecodedValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as a map if this is a Map value
    pub fn as_map(&self) -> Option<&HashMap<String, DecodedValue<F>>> {
        match self {
            DecodedValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Export as plain JSON
    ///
    /// Lossy: blobs become base64 strings, references their document path,
    /// timestamps RFC 3339 strings, and non-finite doubles `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            DecodedValue::Null => serde_json::Value::Null,
            DecodedValue::Boolean(b) => serde_json::Value::Bool(*b),
            DecodedValue::Integer(i) => serde_json::Value::Number((*i).into()),
            DecodedValue::Double(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            DecodedValue::Timestamp(t) => serde_json::Value::String(t.to_string()),
            DecodedValue::String(s) => serde_json::Value::String(s.clone()),
            DecodedValue::Blob(b) => serde_json::Value::String(STANDARD.encode(b.as_ref())),
            DecodedValue::Reference(r) => serde_json::Value::String(r.path()),
            DecodedValue::GeoPoint(p) => serde_json::json!({
                "latitude": p.latitude(),
                "longitude": p.longitude(),
            }),
            DecodedValue::Vector(v) => serde_json::Value::Array(
                v.iter()
                    .map(|f| {
                        serde_json::Number::from_f64(*f)
                            .map(serde_json::Value::Number)
                            .unwrap_or(serde_json::Value::Null)
                    })
                    .collect(),
            ),
            DecodedValue::Array(a) => {
                serde_json::Value::Array(a.iter().map(DecodedValue::to_json).collect())
            }
            DecodedValue::Map(m) => serde_json::Value::Object(
                m.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }
}
