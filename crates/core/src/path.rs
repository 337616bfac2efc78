//! Resource paths and document keys
//!
//! Reference values on the wire carry a full resource name:
//!
//! ```text
//! projects/{project}/databases/{database}/documents/{collection}/{doc}[/{collection}/{doc}...]
//!    0        1          2          3         4          5         6
//! ```
//!
//! `ResourcePath` is the parsed segment list. `DocumentKey` is the
//! database-relative suffix that addresses one document (an even, non-zero
//! number of segments).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of segments in the `projects/{p}/databases/{d}/documents` prefix
pub const DOCUMENT_NAME_PREFIX_LEN: usize = 5;

/// Segment offset of the project id in a resource name
pub const PROJECT_SEGMENT: usize = 1;

/// Segment offset of the database id in a resource name
pub const DATABASE_SEGMENT: usize = 3;

/// A slash-separated path split into segments
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Build a path from owned segments
    pub fn new(segments: Vec<String>) -> Self {
        ResourcePath { segments }
    }

    /// The empty path
    pub fn empty() -> Self {
        ResourcePath {
            segments: Vec::new(),
        }
    }

    /// Parse a slash-separated string
    ///
    /// Leading and trailing slashes are ignored. An empty segment in the
    /// middle (`a//b`) is rejected.
    pub fn from_string(path: &str) -> Result<Self> {
        if path.contains("//") {
            return Err(Error::invalid_resource_name(format!(
                "invalid path '{}': paths must not contain //",
                path
            )));
        }
        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Ok(ResourcePath { segments })
    }

    /// Number of segments
    #[inline]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True if the path has no segments
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment at `index`, if present
    pub fn get(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Last segment, if any
    pub fn last_segment(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// All segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Path with the first `count` segments removed
    pub fn pop_first(&self, count: usize) -> ResourcePath {
        let start = count.min(self.segments.len());
        ResourcePath::new(self.segments[start..].to_vec())
    }

    /// Path with the last segment removed
    pub fn pop_last(&self) -> ResourcePath {
        let end = self.segments.len().saturating_sub(1);
        ResourcePath::new(self.segments[..end].to_vec())
    }

    /// Path with one more segment appended
    pub fn child(&self, segment: impl Into<String>) -> ResourcePath {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        ResourcePath::new(segments)
    }

    /// Segments joined with `/`
    pub fn canonical_string(&self) -> String {
        self.segments.join("/")
    }

    /// `projects/{p}/databases/{d}...` shape
    pub fn is_valid_resource_name(&self) -> bool {
        self.len() >= 4
            && self.get(0) == Some("projects")
            && self.get(2) == Some("databases")
    }

    /// Full document name shape: a valid resource name, `documents` at
    /// offset 4, followed by a non-empty even-length document path.
    pub fn is_valid_document_name(&self) -> bool {
        let key_len = self.len().saturating_sub(DOCUMENT_NAME_PREFIX_LEN);
        self.is_valid_resource_name()
            && self.get(4) == Some("documents")
            && key_len > 0
            && key_len % 2 == 0
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical_string())
    }
}

/// Database-relative path of a single document
///
/// ## Invariants
///
/// - The path has an even, non-zero number of segments
///   (`collection/doc[/collection/doc...]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DocumentKeyRepr")]
pub struct DocumentKey {
    path: ResourcePath,
}

/// Unchecked serde shape of a `DocumentKey`
#[derive(Deserialize)]
struct DocumentKeyRepr {
    path: ResourcePath,
}

impl TryFrom<DocumentKeyRepr> for DocumentKey {
    type Error = Error;

    fn try_from(repr: DocumentKeyRepr) -> Result<Self> {
        DocumentKey::from_path(repr.path)
    }
}

impl DocumentKey {
    /// Create a key, validating the path shape
    pub fn from_path(path: ResourcePath) -> Result<Self> {
        if !Self::is_document_key(&path) {
            return Err(Error::invalid_resource_name(format!(
                "'{}' is not a document path (needs an even number of segments)",
                path
            )));
        }
        Ok(DocumentKey { path })
    }

    /// Parse a key from `collection/doc[/...]`
    pub fn from_path_string(path: &str) -> Result<Self> {
        DocumentKey::from_path(ResourcePath::from_string(path)?)
    }

    /// True if `path` can address a document
    pub fn is_document_key(path: &ResourcePath) -> bool {
        !path.is_empty() && path.len() % 2 == 0
    }

    /// The full database-relative path
    #[inline]
    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// Document id (last segment)
    pub fn id(&self) -> &str {
        self.path.last_segment().unwrap_or_default()
    }

    /// Id of the collection holding the document
    pub fn collection_id(&self) -> &str {
        self.path
            .len()
            .checked_sub(2)
            .and_then(|index| self.path.get(index))
            .unwrap_or_default()
    }

    /// Path of the collection holding the document
    pub fn collection_path(&self) -> ResourcePath {
        self.path.pop_last()
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}

// ============================================================================
// Tests
// ============================================================================
