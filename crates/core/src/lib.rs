//! Core types for firevalue
//!
//! This crate defines the foundational types shared by the wire and decoder
//! crates:
//! - Error: Error type hierarchy
//! - ResourcePath / DocumentKey: resource name parsing and document addressing
//! - Contract types: Timestamp, GeoPoint, DatabaseId

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod contract;
pub mod error;
pub mod path;

pub use error::{Error, Result};
pub use path::{
    DocumentKey, ResourcePath, DATABASE_SEGMENT, DOCUMENT_NAME_PREFIX_LEN, PROJECT_SEGMENT,
};

// Re-export contract types at crate root for convenience
pub use contract::{DatabaseId, GeoPoint, Timestamp, DEFAULT_DATABASE_NAME};
