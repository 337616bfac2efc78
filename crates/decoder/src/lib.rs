//! Wire value decoder for firevalue
//!
//! This crate turns [`firevalue_wire::WireValue`] trees into native values:
//! - ValueDecoder: the recursive decoder, generic over a flavor
//! - Flavor: the two construction hooks (blob, reference) flavors supply
//! - flavors: classic, lite and full client flavors
//! - ServerTimestampBehavior: how pending server timestamps resolve
//! - Diagnostics: sink for cross-database reference reports
//! - DecoderConfig: `firevalue.toml` loading

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod behavior;
pub mod config;
pub mod decoder;
pub mod diagnostics;
pub mod flavor;
pub mod flavors;
pub mod value;

pub use behavior::ServerTimestampBehavior;
pub use config::{DecoderConfig, CONFIG_FILE_NAME};
pub use decoder::{ClassicDecoder, FirestoreDecoder, LiteDecoder, ValueDecoder};
pub use diagnostics::{
    Diagnostics, ForeignDatabaseReference, RecordingDiagnostics, TracingDiagnostics,
};
pub use flavor::{ClientContext, DataConverter, DocumentHandle, Flavor};
pub use flavors::{
    Blob, Bytes, ClassicDocumentReference, ClassicFirestore, ClassicFlavor, DocumentReference,
    Firestore, LiteFirestore, ModernFlavor,
};
pub use value::DecodedValue;
