//! Flavor extension points
//!
//! Every client flavor decodes with the same algorithm. They differ only in
//! how a byte sequence and a document key become application values, so that
//! is all a `Flavor` supplies, together with the database the client is
//! bound to.

use firevalue_core::{DatabaseId, DocumentKey};
use std::fmt;

/// Capability set a decoder is specialized with
pub trait Flavor: Clone + fmt::Debug + Send + Sync {
    /// Application type for byte sequences
    type Blob: AsRef<[u8]> + Clone + fmt::Debug + PartialEq;

    /// Application type for document references
    type Reference: DocumentHandle + Clone + fmt::Debug + PartialEq;

    /// Database references are expected to point into
    fn database_id(&self) -> &DatabaseId;

    /// Wrap normalized bytes
    fn construct_blob(&self, bytes: Vec<u8>) -> Self::Blob;

    /// Bind a key to this flavor's client
    fn construct_reference(&self, key: DocumentKey) -> Self::Reference;
}

/// Client instance a flavor closes over
pub trait ClientContext: fmt::Debug + Send + Sync {
    /// Database this client talks to
    fn database_id(&self) -> &DatabaseId;
}

/// Common view of every flavor's reference type
pub trait DocumentHandle {
    /// Database-relative key
    fn key(&self) -> &DocumentKey;

    /// Database the reference belongs to
    fn database_id(&self) -> &DatabaseId;

    /// Slash-separated document path
    fn path(&self) -> String {
        self.key().to_string()
    }

    /// Document id
    fn id(&self) -> &str {
        self.key().id()
    }
}

/// Application-supplied converter attached to a reference
///
/// The decoder never attaches one; references it produces carry `None`.
pub trait DataConverter: fmt::Debug + Send + Sync {
    /// Name used in debug output
    fn name(&self) -> &str;
}
