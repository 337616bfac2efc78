//! Diagnostics sink
//!
//! References into a database other than the client's own are decoded
//! anyway, as if they pointed into the client's database. The decoder
//! reports each such reference to a [`Diagnostics`] sink handed to it at
//! construction; it never fails the call.

use firevalue_core::{DatabaseId, DocumentKey};
use parking_lot::Mutex;
use std::fmt;

/// A reference whose embedded database differs from the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignDatabaseReference {
    /// Key the reference was decoded to
    pub document: DocumentKey,
    /// Database named in the reference
    pub found: DatabaseId,
    /// Database the decoding client is bound to
    pub expected: DatabaseId,
}

impl fmt::Display for ForeignDatabaseReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Document {} contains a document reference within a different database ({}) \
             which is not supported. It will be treated as a reference in the current \
             database ({}) instead.",
            self.document, self.found, self.expected
        )
    }
}

/// Receiver of non-fatal decoding anomalies
pub trait Diagnostics: fmt::Debug + Send + Sync {
    /// Called once per reference into a foreign database
    fn foreign_database_reference(&self, event: &ForeignDatabaseReference);
}

/// Default sink: a `tracing` warning per event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn foreign_database_reference(&self, event: &ForeignDatabaseReference) {
        tracing::warn!(
            target: "firevalue::decoder",
            document = %event.document,
            found = %event.found,
            expected = %event.expected,
            "{}",
            event
        );
    }
}

/// Sink that keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    events: Mutex<Vec<ForeignDatabaseReference>>,
}

impl RecordingDiagnostics {
    /// Empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events, oldest first
    pub fn events(&self) -> Vec<ForeignDatabaseReference> {
        self.events.lock().clone()
    }

    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// True if nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drop all recorded events
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn foreign_database_reference(&self, event: &ForeignDatabaseReference) {
        self.events.lock().push(event.clone());
    }
}
