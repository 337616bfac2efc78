//! Wire value model for firevalue
//!
//! - `value`: the tagged `WireValue` union and its payload types (serde maps
//!   them to the REST JSON form)
//! - `kind`: logical classification and cross-type ordering
//! - `sentinel`: map-encoded server timestamps, vectors and the max sentinel
//! - `normalize`: canonicalization of number, byte and timestamp spellings

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod kind;
pub mod normalize;
pub mod sentinel;
pub mod value;

pub use kind::ValueKind;
pub use normalize::{
    normalize_byte_string, normalize_double, normalize_integer, normalize_lat_lng,
    normalize_number, normalize_timestamp,
};
pub use sentinel::{
    get_local_write_time, get_previous_value, is_server_timestamp, server_timestamp,
    vector_components, vector_value,
};
pub use value::{
    ArrayValue, Int64, LatLng, MapValue, NullValue, WireBytes, WireDouble, WireTimestamp,
    WireValue,
};
