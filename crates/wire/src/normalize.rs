//! Normalization of wire payloads into native values
//!
//! The wire format allows several spellings for numbers, bytes and
//! timestamps. Each function here accepts every spelling and returns the
//! canonical native form. A payload that cannot be read is a contract
//! violation (`Error::InvalidValue`).

use crate::value::{Int64, LatLng, WireBytes, WireDouble, WireTimestamp, WireValue};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use firevalue_core::{Error, GeoPoint, Result, Timestamp};

/// Normalize an int64 payload
pub fn normalize_integer(value: &Int64) -> Result<i64> {
    match value {
        Int64::Number(i) => Ok(*i),
        Int64::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::invalid_value(format!("bad integer '{}'", s))),
    }
}

/// Normalize a double payload, including the textual non-finite spellings
pub fn normalize_double(value: &WireDouble) -> Result<f64> {
    match value {
        WireDouble::Number(f) => Ok(*f),
        WireDouble::Text(s) => match s.as_str() {
            "NaN" => Ok(f64::NAN),
            "Infinity" => Ok(f64::INFINITY),
            "-Infinity" => Ok(f64::NEG_INFINITY),
            other => other
                .parse::<f64>()
                .map_err(|_| Error::invalid_value(format!("bad double '{}'", other))),
        },
    }
}

/// Normalize a numeric wire value (integer or double) into an `f64`
///
/// Used where the wire format only promises "a number", such as vector
/// components.
pub fn normalize_number(value: &WireValue) -> Result<f64> {
    match value {
        WireValue::Integer(i) => Ok(normalize_integer(i)? as f64),
        WireValue::Double(d) => normalize_double(d),
        other => Err(Error::invalid_value(format!(
            "expected a number, found {}",
            other.tag_name()
        ))),
    }
}

/// Normalize a bytes payload
pub fn normalize_byte_string(value: &WireBytes) -> Result<Vec<u8>> {
    match value {
        WireBytes::Raw(bytes) => Ok(bytes.clone()),
        WireBytes::Base64(encoded) => STANDARD
            .decode(encoded)
            .map_err(|e| Error::invalid_value(format!("bad base64 bytes: {}", e))),
    }
}

/// Normalize a timestamp payload into a validated `Timestamp`
pub fn normalize_timestamp(value: &WireTimestamp) -> Result<Timestamp> {
    let ts = match value {
        WireTimestamp::Rfc3339(s) => Timestamp::parse_rfc3339(s),
        WireTimestamp::Parts { seconds, nanos } => {
            Timestamp::new(normalize_integer(seconds)?, *nanos)
        }
    };
    ts.map_err(|e| Error::invalid_value(e.to_string()))
}

/// Normalize a latitude/longitude payload into a validated `GeoPoint`
pub fn normalize_lat_lng(value: &LatLng) -> Result<GeoPoint> {
    GeoPoint::new(value.latitude, value.longitude).map_err(|e| Error::invalid_value(e.to_string()))
}
