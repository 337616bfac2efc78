//! Classic flavor
//!
//! Bytes decode to [`Blob`] and references to [`ClassicDocumentReference`].
//! The classic reference wraps a modern one bound to [`ClassicFirestore`].

use super::bytes::Blob;
use super::modern::DocumentReference;
use crate::config::DecoderConfig;
use crate::flavor::{ClientContext, DataConverter, DocumentHandle, Flavor};
use firevalue_core::{DatabaseId, DocumentKey, Result};
use std::sync::Arc;

/// Classic client context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicFirestore {
    database_id: DatabaseId,
}

impl ClassicFirestore {
    /// Client bound to `database_id`
    pub fn new(database_id: DatabaseId) -> Self {
        ClassicFirestore { database_id }
    }

    /// Client bound to the database named in `config`
    pub fn from_config(config: &DecoderConfig) -> Result<Self> {
        Ok(ClassicFirestore::new(config.database_id()?))
    }
}

impl ClientContext for ClassicFirestore {
    fn database_id(&self) -> &DatabaseId {
        &self.database_id
    }
}

/// Classic document reference
#[derive(Debug, Clone, PartialEq)]
pub struct ClassicDocumentReference {
    inner: DocumentReference<ClassicFirestore>,
}

impl ClassicDocumentReference {
    /// Reference without a converter
    pub fn new(firestore: Arc<ClassicFirestore>, key: DocumentKey) -> Self {
        ClassicDocumentReference {
            inner: DocumentReference::new(firestore, key),
        }
    }

    /// Same reference with `converter` attached
    pub fn with_converter(self, converter: Arc<dyn DataConverter>) -> Self {
        ClassicDocumentReference {
            inner: self.inner.with_converter(converter),
        }
    }

    /// Client the reference is bound to
    pub fn firestore(&self) -> &Arc<ClassicFirestore> {
        self.inner.firestore()
    }

    /// Attached converter, if any
    pub fn converter(&self) -> Option<&Arc<dyn DataConverter>> {
        self.inner.converter()
    }

    /// The underlying modern reference
    pub fn as_modern(&self) -> &DocumentReference<ClassicFirestore> {
        &self.inner
    }
}

impl DocumentHandle for ClassicDocumentReference {
    fn key(&self) -> &DocumentKey {
        self.inner.key()
    }

    fn database_id(&self) -> &DatabaseId {
        self.inner.database_id()
    }
}

/// Flavor for the classic client
#[derive(Debug, Clone)]
pub struct ClassicFlavor {
    firestore: Arc<ClassicFirestore>,
}

impl ClassicFlavor {
    /// Flavor closing over `firestore`
    pub fn new(firestore: Arc<ClassicFirestore>) -> Self {
        ClassicFlavor { firestore }
    }

    /// Client this flavor binds references to
    pub fn firestore(&self) -> &Arc<ClassicFirestore> {
        &self.firestore
    }
}

impl Flavor for ClassicFlavor {
    type Blob = Blob;
    type Reference = ClassicDocumentReference;

    fn database_id(&self) -> &DatabaseId {
        &self.firestore.database_id
    }

    fn construct_blob(&self, bytes: Vec<u8>) -> Blob {
        Blob::from_vec(bytes)
    }

    fn construct_reference(&self, key: DocumentKey) -> ClassicDocumentReference {
        ClassicDocumentReference::new(Arc::clone(&self.firestore), key)
    }
}
