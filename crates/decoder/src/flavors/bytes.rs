//! Byte sequence types
//!
//! `Bytes` is the modern type; `Blob` is the classic one and wraps it.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use firevalue_core::{Error, Result};
use std::fmt;

/// Immutable byte sequence
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Bytes(Vec<u8>);

impl Bytes {
    /// Wrap owned bytes
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }

    /// Decode a standard-alphabet base64 string
    pub fn from_base64(encoded: &str) -> Result<Self> {
        STANDARD
            .decode(encoded)
            .map(Bytes)
            .map_err(|e| Error::invalid_value(format!("bad base64: {}", e)))
    }

    /// Encode as a standard-alphabet base64 string
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.0)
    }

    /// Borrow the bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no bytes
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Take the bytes back
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Bytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl fmt::Debug for Bytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bytes(base64-{})", self.to_base64())
    }
}

/// Classic byte sequence type
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Blob(Bytes);

impl Blob {
    /// Wrap owned bytes
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Blob(Bytes::from_vec(bytes))
    }

    /// Decode a standard-alphabet base64 string
    pub fn from_base64_string(encoded: &str) -> Result<Self> {
        Bytes::from_base64(encoded).map(Blob)
    }

    /// Encode as a standard-alphabet base64 string
    pub fn to_base64(&self) -> String {
        self.0.to_base64()
    }

    /// Borrow the bytes
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// The modern representation of the same bytes
    pub fn bytes(&self) -> &Bytes {
        &self.0
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl From<Bytes> for Blob {
    fn from(bytes: Bytes) -> Self {
        Blob(bytes)
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Blob(base64-{})", self.to_base64())
    }
}
