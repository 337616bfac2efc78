//! Contract value types
//!
//! The small value objects the decoder produces and checks against:
//!
//! - `timestamp`: nanosecond timestamps with validated range
//! - `geo_point`: latitude/longitude pairs
//! - `database_id`: `{project, database}` identity scoping references
//!
//! ## Usage
//!
//! ```
//! use firevalue_core::contract::{DatabaseId, GeoPoint, Timestamp};
//! ```

pub mod database_id;
pub mod geo_point;
pub mod timestamp;

// Re-exports
pub use database_id::{DatabaseId, DEFAULT_DATABASE_NAME};
pub use geo_point::GeoPoint;
pub use timestamp::Timestamp;
