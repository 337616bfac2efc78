//! Map-encoded sentinel values
//!
//! Some logical value kinds have no tag of their own and travel as a
//! `mapValue` whose `__type__` field names the kind:
//!
//! | `__type__` | Kind | Other fields |
//! |---|---|---|
//! | `server_timestamp` | pending server timestamp | `__local_write_time__` (timestamp), optional `__previous_value__` |
//! | `__vector__` | vector of doubles | `value` (array of numbers) |
//! | `__max__` | max-value sentinel (internal, never decodable) | none |

use crate::normalize::normalize_number;
use crate::value::{ArrayValue, MapValue, WireTimestamp, WireValue};
use firevalue_core::{Error, Result};

/// Field naming the sentinel kind
pub const TYPE_KEY: &str = "__type__";
/// `__type__` of a pending server timestamp
pub const SERVER_TIMESTAMP_SENTINEL: &str = "server_timestamp";
/// Field carrying the local estimate of a server timestamp
pub const LOCAL_WRITE_TIME_KEY: &str = "__local_write_time__";
/// Field carrying the value a server timestamp replaces
pub const PREVIOUS_VALUE_KEY: &str = "__previous_value__";
/// `__type__` of a vector value
pub const VECTOR_SENTINEL: &str = "__vector__";
/// Field carrying the components of a vector value
pub const VECTOR_VALUE_KEY: &str = "value";
/// `__type__` of the max-value sentinel
pub const MAX_VALUE_SENTINEL: &str = "__max__";

/// `__type__` of a map, if it carries one
pub fn sentinel_type(map: &MapValue) -> Option<&str> {
    map.get(TYPE_KEY).and_then(WireValue::as_str)
}

/// True if `value` is a pending server timestamp
pub fn is_server_timestamp(value: &WireValue) -> bool {
    value.as_map().and_then(sentinel_type) == Some(SERVER_TIMESTAMP_SENTINEL)
}

/// Build a pending server timestamp
pub fn server_timestamp(local_write_time: WireTimestamp, previous: Option<WireValue>) -> WireValue {
    let mut map = MapValue::default();
    map.fields.insert(
        TYPE_KEY.to_string(),
        WireValue::from(SERVER_TIMESTAMP_SENTINEL),
    );
    map.fields.insert(
        LOCAL_WRITE_TIME_KEY.to_string(),
        WireValue::Timestamp(local_write_time),
    );
    if let Some(previous) = previous {
        map.fields.insert(PREVIOUS_VALUE_KEY.to_string(), previous);
    }
    WireValue::Map(map)
}

/// Local write time of a server timestamp wrapper
///
/// # Errors
///
/// `Error::InvalidValue` if the field is missing or not a timestamp.
pub fn get_local_write_time(wrapper: &MapValue) -> Result<&WireTimestamp> {
    match wrapper.get(LOCAL_WRITE_TIME_KEY) {
        Some(WireValue::Timestamp(ts)) => Ok(ts),
        Some(other) => Err(Error::invalid_value(format!(
            "server timestamp local write time is a {}",
            other.tag_name()
        ))),
        None => Err(Error::invalid_value(
            "server timestamp is missing its local write time",
        )),
    }
}

/// Value a server timestamp wrapper replaces, if any
pub fn get_previous_value(wrapper: &MapValue) -> Option<&WireValue> {
    wrapper.get(PREVIOUS_VALUE_KEY)
}

/// Build a vector value
pub fn vector_value(components: &[f64]) -> WireValue {
    let mut map = MapValue::default();
    map.fields
        .insert(TYPE_KEY.to_string(), WireValue::from(VECTOR_SENTINEL));
    map.fields.insert(
        VECTOR_VALUE_KEY.to_string(),
        WireValue::Array(ArrayValue {
            values: components.iter().copied().map(WireValue::from).collect(),
        }),
    );
    WireValue::Map(map)
}

/// Components of a vector value
///
/// # Errors
///
/// `Error::InvalidValue` if `value` is missing, not an array, or holds a
/// non-numeric element.
pub fn vector_components(vector: &MapValue) -> Result<Vec<f64>> {
    match vector.get(VECTOR_VALUE_KEY) {
        Some(WireValue::Array(array)) => array.values.iter().map(normalize_number).collect(),
        Some(other) => Err(Error::invalid_value(format!(
            "vector components are a {}",
            other.tag_name()
        ))),
        None => Err(Error::invalid_value("vector value is missing its components")),
    }
}
