//! Recursive wire value decoder
//!
//! `ValueDecoder<F>` walks a [`WireValue`] tree and builds the matching
//! [`DecodedValue<F>`]. The algorithm is the same for every flavor; `F` only
//! decides the concrete blob and reference types.
//!
//! ## Failure model
//!
//! - A value the wire contract does not allow (malformed payload, invalid
//!   reference name, undecodable sentinel) aborts the whole call with an
//!   error. No partial result is returned.
//! - A reference into another database is decoded as if it pointed into the
//!   client's database and reported to the diagnostics sink.
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use firevalue_core::DatabaseId;
//! use firevalue_decoder::{LiteDecoder, LiteFirestore, ModernFlavor, ServerTimestampBehavior};
//! use firevalue_wire::WireValue;
//!
//! let client = Arc::new(LiteFirestore::new(DatabaseId::new("p", "(default)")));
//! let decoder = LiteDecoder::new(ModernFlavor::new(client));
//!
//! let value = WireValue::from_json_str(r#"{"integerValue": "42"}"#).unwrap();
//! let decoded = decoder.decode(&value, ServerTimestampBehavior::None).unwrap();
//! assert_eq!(decoded.as_integer(), Some(42));
//! ```

use crate::behavior::ServerTimestampBehavior;
use crate::config::DecoderConfig;
use crate::diagnostics::{Diagnostics, ForeignDatabaseReference, TracingDiagnostics};
use crate::flavor::Flavor;
use crate::flavors::{ClassicFlavor, Firestore, LiteFirestore, ModernFlavor};
use crate::value::DecodedValue;
use firevalue_core::{
    DatabaseId, DocumentKey, Error, ResourcePath, Result, DATABASE_SEGMENT,
    DOCUMENT_NAME_PREFIX_LEN, PROJECT_SEGMENT,
};
use firevalue_wire::{
    get_local_write_time, get_previous_value, normalize_byte_string, normalize_double,
    normalize_integer, normalize_lat_lng, normalize_timestamp, vector_components, MapValue,
    ValueKind, WireValue,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::trace;

/// Decoder for the classic client
pub type ClassicDecoder = ValueDecoder<ClassicFlavor>;

/// Decoder for the lite client
pub type LiteDecoder = ValueDecoder<ModernFlavor<LiteFirestore>>;

/// Decoder for the full client
pub type FirestoreDecoder = ValueDecoder<ModernFlavor<Firestore>>;

/// Wire value decoder specialized by flavor `F`
#[derive(Debug, Clone)]
pub struct ValueDecoder<F: Flavor> {
    flavor: F,
    diagnostics: Arc<dyn Diagnostics>,
    default_behavior: ServerTimestampBehavior,
}

impl<F: Flavor> ValueDecoder<F> {
    /// Decoder reporting anomalies through `tracing`
    pub fn new(flavor: F) -> Self {
        ValueDecoder {
            flavor,
            diagnostics: Arc::new(TracingDiagnostics),
            default_behavior: ServerTimestampBehavior::default(),
        }
    }

    /// Decoder with the default behavior taken from `config`
    pub fn from_config(flavor: F, config: &DecoderConfig) -> Self {
        ValueDecoder::new(flavor).with_default_behavior(config.server_timestamp_behavior())
    }

    /// Replace the diagnostics sink
    pub fn with_diagnostics(self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        ValueDecoder {
            diagnostics,
            ..self
        }
    }

    /// Replace the behavior used by [`decode_default`](Self::decode_default)
    pub fn with_default_behavior(self, default_behavior: ServerTimestampBehavior) -> Self {
        ValueDecoder {
            default_behavior,
            ..self
        }
    }

    /// The flavor this decoder builds values with
    pub fn flavor(&self) -> &F {
        &self.flavor
    }

    /// Behavior used by [`decode_default`](Self::decode_default)
    pub fn default_behavior(&self) -> ServerTimestampBehavior {
        self.default_behavior
    }

    /// Database references are expected to point into
    pub fn database_id(&self) -> &DatabaseId {
        self.flavor.database_id()
    }

    /// Decode with the configured default behavior
    pub fn decode_default(&self, value: &WireValue) -> Result<DecodedValue<F>> {
        self.decode(value, self.default_behavior)
    }

    /// Decode `value`, resolving pending server timestamps per `behavior`
    ///
    /// # Errors
    ///
    /// Contract violations anywhere in the tree (see module docs).
    pub fn decode(
        &self,
        value: &WireValue,
        behavior: ServerTimestampBehavior,
    ) -> Result<DecodedValue<F>> {
        match value {
            WireValue::Null(_) => Ok(DecodedValue::Null),
            WireValue::Boolean(b) => Ok(DecodedValue::Boolean(*b)),
            WireValue::Integer(i) => Ok(DecodedValue::Integer(normalize_integer(i)?)),
            WireValue::Double(d) => Ok(DecodedValue::Double(normalize_double(d)?)),
            WireValue::Timestamp(ts) => Ok(DecodedValue::Timestamp(normalize_timestamp(ts)?)),
            WireValue::String(s) => Ok(DecodedValue::String(s.clone())),
            WireValue::Bytes(bytes) => Ok(DecodedValue::Blob(
                self.flavor.construct_blob(normalize_byte_string(bytes)?),
            )),
            WireValue::Reference(name) => Ok(DecodedValue::Reference(self.decode_reference(name)?)),
            WireValue::GeoPoint(lat_lng) => Ok(DecodedValue::GeoPoint(normalize_lat_lng(lat_lng)?)),
            WireValue::Array(array) => array
                .values
                .iter()
                .map(|element| self.decode(element, behavior))
                .collect::<Result<Vec<_>>>()
                .map(DecodedValue::Array),
            WireValue::Map(map) => match value.kind() {
                ValueKind::ServerTimestamp => self.decode_server_timestamp(map, behavior),
                ValueKind::Vector => Ok(DecodedValue::Vector(vector_components(map)?)),
                ValueKind::MaxValue => Err(Error::invalid_value(
                    "the max-value sentinel cannot be decoded",
                )),
                _ => self.decode_fields(map, behavior).map(DecodedValue::Map),
            },
        }
    }

    /// Decode every field of a map into a fresh record
    ///
    /// This is what a document's top-level field set decodes through.
    pub fn decode_fields(
        &self,
        map: &MapValue,
        behavior: ServerTimestampBehavior,
    ) -> Result<HashMap<String, DecodedValue<F>>> {
        let mut record = HashMap::with_capacity(map.fields.len());
        for (key, value) in &map.fields {
            record.insert(key.clone(), self.decode(value, behavior)?);
        }
        Ok(record)
    }

    fn decode_server_timestamp(
        &self,
        wrapper: &MapValue,
        behavior: ServerTimestampBehavior,
    ) -> Result<DecodedValue<F>> {
        match behavior {
            ServerTimestampBehavior::Previous => match get_previous_value(wrapper) {
                Some(previous) => self.decode(previous, ServerTimestampBehavior::Previous),
                None => Ok(DecodedValue::Null),
            },
            ServerTimestampBehavior::Estimate => {
                let local_write_time = get_local_write_time(wrapper)?;
                Ok(DecodedValue::Timestamp(normalize_timestamp(local_write_time)?))
            }
            ServerTimestampBehavior::None => Ok(DecodedValue::Null),
        }
    }

    fn decode_reference(&self, name: &str) -> Result<F::Reference> {
        let path = ResourcePath::from_string(name)?;
        if !path.is_valid_document_name() {
            return Err(Error::invalid_resource_name(format!(
                "reference value is not a valid document name: {}",
                name
            )));
        }

        let found = DatabaseId::new(
            path.get(PROJECT_SEGMENT).unwrap_or_default(),
            path.get(DATABASE_SEGMENT).unwrap_or_default(),
        );
        let key = DocumentKey::from_path(path.pop_first(DOCUMENT_NAME_PREFIX_LEN))?;

        let expected = self.flavor.database_id();
        if &found != expected {
            self.diagnostics
                .foreign_database_reference(&ForeignDatabaseReference {
                    document: key.clone(),
                    found,
                    expected: expected.clone(),
                });
        }

        trace!(target: "firevalue::decoder", document = %key, "Reference decoded");
        Ok(self.flavor.construct_reference(key))
    }
}
