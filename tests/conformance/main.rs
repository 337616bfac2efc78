//! Decoder Conformance Test Suite
//!
//! End-to-end checks of the decoding contract through the public `firevalue`
//! API.
//!
//! ## Modules
//!
//! - `properties`: property-based checks (scalars, arrays, maps, server timestamps)
//! - `references`: reference resolution and database reconciliation
//! - `documents`: whole documents in REST JSON form
//! - `errors`: contract violations abort with no partial result
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test conformance
//! cargo test --test conformance properties::
//! ```

use std::sync::Arc;

use firevalue::{
    ClassicDecoder, ClassicFirestore, ClassicFlavor, DatabaseId, Firestore, FirestoreDecoder,
    LiteDecoder, LiteFirestore, ModernFlavor, RecordingDiagnostics,
};

/// Database every helper decoder is bound to
pub fn home() -> DatabaseId {
    DatabaseId::new("P", "D")
}

/// Full-client decoder with a recording sink
pub fn full_decoder() -> (FirestoreDecoder, Arc<RecordingDiagnostics>) {
    let sink = Arc::new(RecordingDiagnostics::new());
    let decoder = FirestoreDecoder::new(ModernFlavor::new(Arc::new(Firestore::new(home()))))
        .with_diagnostics(sink.clone());
    (decoder, sink)
}

/// Lite-client decoder with a recording sink
pub fn lite_decoder() -> (LiteDecoder, Arc<RecordingDiagnostics>) {
    let sink = Arc::new(RecordingDiagnostics::new());
    let decoder = LiteDecoder::new(ModernFlavor::new(Arc::new(LiteFirestore::new(home()))))
        .with_diagnostics(sink.clone());
    (decoder, sink)
}

/// Classic-client decoder with a recording sink
pub fn classic_decoder() -> (ClassicDecoder, Arc<RecordingDiagnostics>) {
    let sink = Arc::new(RecordingDiagnostics::new());
    let decoder = ClassicDecoder::new(ClassicFlavor::new(Arc::new(ClassicFirestore::new(home()))))
        .with_diagnostics(sink.clone());
    (decoder, sink)
}

mod documents;
mod errors;
mod properties;
mod references;
