//! Modern flavors
//!
//! The lite and full clients share one flavor implementation: bytes decode to
//! [`Bytes`] and references to [`DocumentReference<C>`], where `C` is the
//! client type. The two differ only in that type parameter.

use super::bytes::Bytes;
use crate::config::DecoderConfig;
use crate::flavor::{ClientContext, DataConverter, DocumentHandle, Flavor};
use firevalue_core::{DatabaseId, DocumentKey, Result};
use std::fmt;
use std::sync::Arc;

/// Lite client context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteFirestore {
    database_id: DatabaseId,
}

impl LiteFirestore {
    /// Client bound to `database_id`
    pub fn new(database_id: DatabaseId) -> Self {
        LiteFirestore { database_id }
    }

    /// Client bound to the database named in `config`
    pub fn from_config(config: &DecoderConfig) -> Result<Self> {
        Ok(LiteFirestore::new(config.database_id()?))
    }
}

impl ClientContext for LiteFirestore {
    fn database_id(&self) -> &DatabaseId {
        &self.database_id
    }
}

/// Full client context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Firestore {
    database_id: DatabaseId,
}

impl Firestore {
    /// Client bound to `database_id`
    pub fn new(database_id: DatabaseId) -> Self {
        Firestore { database_id }
    }

    /// Client bound to the database named in `config`
    pub fn from_config(config: &DecoderConfig) -> Result<Self> {
        Ok(Firestore::new(config.database_id()?))
    }
}

impl ClientContext for Firestore {
    fn database_id(&self) -> &DatabaseId {
        &self.database_id
    }
}

/// Reference to a document, bound to a client of type `C`
pub struct DocumentReference<C: ClientContext> {
    firestore: Arc<C>,
    key: DocumentKey,
    converter: Option<Arc<dyn DataConverter>>,
}

impl<C: ClientContext> DocumentReference<C> {
    /// Reference without a converter
    pub fn new(firestore: Arc<C>, key: DocumentKey) -> Self {
        DocumentReference {
            firestore,
            key,
            converter: None,
        }
    }

    /// Same reference with `converter` attached
    pub fn with_converter(self, converter: Arc<dyn DataConverter>) -> Self {
        DocumentReference {
            converter: Some(converter),
            ..self
        }
    }

    /// Client the reference is bound to
    pub fn firestore(&self) -> &Arc<C> {
        &self.firestore
    }

    /// Attached converter, if any
    pub fn converter(&self) -> Option<&Arc<dyn DataConverter>> {
        self.converter.as_ref()
    }
}

impl<C: ClientContext> DocumentHandle for DocumentReference<C> {
    fn key(&self) -> &DocumentKey {
        &self.key
    }

    fn database_id(&self) -> &DatabaseId {
        self.firestore.database_id()
    }
}

impl<C: ClientContext> Clone for DocumentReference<C> {
    fn clone(&self) -> Self {
        DocumentReference {
            firestore: Arc::clone(&self.firestore),
            key: self.key.clone(),
            converter: self.converter.clone(),
        }
    }
}

// Equal when they address the same document in the same database.
impl<C: ClientContext> PartialEq for DocumentReference<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.database_id() == other.database_id()
    }
}

impl<C: ClientContext> fmt::Debug for DocumentReference<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentReference")
            .field("database", &self.database_id().to_string())
            .field("path", &self.key.to_string())
            .field("converter", &self.converter.as_ref().map(|c| c.name()))
            .finish()
    }
}

/// Flavor for the lite and full clients
pub struct ModernFlavor<C: ClientContext> {
    firestore: Arc<C>,
}

impl<C: ClientContext> ModernFlavor<C> {
    /// Flavor closing over `firestore`
    pub fn new(firestore: Arc<C>) -> Self {
        ModernFlavor { firestore }
    }

    /// Client this flavor binds references to
    pub fn firestore(&self) -> &Arc<C> {
        &self.firestore
    }
}

impl<C: ClientContext> Clone for ModernFlavor<C> {
    fn clone(&self) -> Self {
        ModernFlavor {
            firestore: Arc::clone(&self.firestore),
        }
    }
}

impl<C: ClientContext> fmt::Debug for ModernFlavor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModernFlavor")
            .field("firestore", &self.firestore)
            .finish()
    }
}

impl<C: ClientContext> Flavor for ModernFlavor<C> {
    type Blob = Bytes;
    type Reference = DocumentReference<C>;

    fn database_id(&self) -> &DatabaseId {
        self.firestore.database_id()
    }

    fn construct_blob(&self, bytes: Vec<u8>) -> Bytes {
        Bytes::from_vec(bytes)
    }

    fn construct_reference(&self, key: DocumentKey) -> DocumentReference<C> {
        DocumentReference::new(Arc::clone(&self.firestore), key)
    }
}
