//! Concrete flavors
//!
//! - `classic`: [`ClassicFlavor`], bytes as [`Blob`]
//! - `modern`: [`ModernFlavor<C>`] for the lite and full clients, bytes as [`Bytes`]

pub mod bytes;
pub mod classic;
pub mod modern;

pub use bytes::{Blob, Bytes};
pub use classic::{ClassicDocumentReference, ClassicFirestore, ClassicFlavor};
pub use modern::{DocumentReference, Firestore, LiteFirestore, ModernFlavor};
