//! firevalue - decoder for document-store wire values
//!
//! Converts the backend's tagged wire representation into native values for
//! one of three client flavors (classic, lite, full).
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use firevalue::{DatabaseId, Firestore, FirestoreDecoder, ModernFlavor, ServerTimestampBehavior, WireValue};
//!
//! let client = Arc::new(Firestore::new(DatabaseId::new("my-project", "(default)")));
//! let decoder = FirestoreDecoder::new(ModernFlavor::new(client));
//!
//! let wire = WireValue::from_json_str(r#"{"arrayValue": {"values": [{"booleanValue": true}]}}"#)?;
//! let value = decoder.decode(&wire, ServerTimestampBehavior::Estimate)?;
//! assert_eq!(value.as_array().map(|a| a.len()), Some(1));
//! # Ok::<(), firevalue::Error>(())
//! ```
//!
//! # Architecture
//!
//! - `firevalue-core`: errors, resource paths, timestamps, geo points, database identity
//! - `firevalue-wire`: the wire value model and its normalization
//! - `firevalue-decoder`: the decoder, flavors, diagnostics and config

pub use firevalue_core::{
    DatabaseId, DocumentKey, Error, GeoPoint, ResourcePath, Result, Timestamp,
    DEFAULT_DATABASE_NAME,
};
pub use firevalue_decoder::*;
pub use firevalue_wire::{MapValue, ValueKind, WireValue};
