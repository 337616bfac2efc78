//! Error types for firevalue
//!
//! This module defines all error types used throughout the workspace.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! ## Two tiers
//!
//! - **Contract violations** (`InvalidValue`, `InvalidResourceName`): the backend
//!   emitted data that breaks its own wire format. Callers should treat these as
//!   defects, never retry them.
//! - Everything else is a local problem (bad config, unreadable file, a value
//!   object constructed out of range).
//!
//! Database mismatches on references are NOT errors; they are reported through
//! the decoder's diagnostics sink.

use std::io;
use thiserror::Error;

/// Result type alias for firevalue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for firevalue
#[derive(Debug, Error)]
pub enum Error {
    /// Wire value without a recognized tag, or with a malformed payload
    #[error("Invalid value: {0}")]
    InvalidValue(String),

    /// Reference name that is not a valid document resource name
    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),

    /// Timestamp outside the representable range
    #[error("Invalid timestamp: seconds={seconds}, nanos={nanos}")]
    InvalidTimestamp {
        /// Seconds since Unix epoch
        seconds: i64,
        /// Nanosecond fraction
        nanos: i32,
    },

    /// Geo point with latitude or longitude out of range
    #[error("Invalid geo point: latitude={latitude}, longitude={longitude}")]
    InvalidGeoPoint {
        /// Latitude in degrees
        latitude: f64,
        /// Longitude in degrees
        longitude: f64,
    },

    /// Configuration could not be parsed or validated
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// I/O error (config file access)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an `InvalidValue` error
    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Error::InvalidValue(msg.into())
    }

    /// Build an `InvalidResourceName` error
    pub fn invalid_resource_name(msg: impl Into<String>) -> Self {
        Error::InvalidResourceName(msg.into())
    }

    /// Build an `InvalidConfig` error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// True when the error means the backend broke the wire contract.
    ///
    /// Contract violations are never retried.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::InvalidValue(_) | Error::InvalidResourceName(_))
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(e: toml::ser::Error) -> Self {
        Error::InvalidConfig(e.to_string())
    }
}
