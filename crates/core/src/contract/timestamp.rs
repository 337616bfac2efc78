//! Nanosecond-precision timestamp type
//!
//! Timestamps are stored as whole seconds since Unix epoch plus a
//! non-negative nanosecond fraction, which is exactly the shape the wire
//! format carries.
//!
//! ## Range
//!
//! Valid timestamps lie in `0001-01-01T00:00:00Z ..= 9999-12-31T23:59:59.999999999Z`.
//! Construction outside that range fails with `Error::InvalidTimestamp`.
//!
//! ## Usage
//!
//! ```
//! use firevalue_core::Timestamp;
//!
//! let ts = Timestamp::new(1_700_000_000, 500).unwrap();
//! assert_eq!(ts.seconds(), 1_700_000_000);
//!
//! let parsed = Timestamp::parse_rfc3339("2023-11-14T22:13:20.000000500Z").unwrap();
//! assert_eq!(parsed, ts);
//! ```

use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds of `0001-01-01T00:00:00Z`
pub const MIN_SECONDS: i64 = -62_135_596_800;

/// Seconds of `10000-01-01T00:00:00Z` (exclusive upper bound)
pub const MAX_SECONDS_EXCLUSIVE: i64 = 253_402_300_800;

const NANOS_PER_SECOND: i32 = 1_000_000_000;

/// A point in time with nanosecond precision
///
/// ## Invariants
///
/// - `0 <= nanos < 1_000_000_000`
/// - `MIN_SECONDS <= seconds < MAX_SECONDS_EXCLUSIVE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimestampRepr")]
pub struct Timestamp {
    seconds: i64,
    nanos: i32,
}

/// Unchecked serde shape of a `Timestamp`
#[derive(Deserialize)]
struct TimestampRepr {
    seconds: i64,
    nanos: i32,
}

impl TryFrom<TimestampRepr> for Timestamp {
    type Error = Error;

    fn try_from(repr: TimestampRepr) -> Result<Self> {
        Timestamp::new(repr.seconds, repr.nanos)
    }
}

impl Timestamp {
    /// Unix epoch (1970-01-01 00:00:00 UTC)
    pub const EPOCH: Timestamp = Timestamp {
        seconds: 0,
        nanos: 0,
    };

    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create a timestamp, validating the range
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidTimestamp` if either component is out of range.
    pub fn new(seconds: i64, nanos: i32) -> Result<Self> {
        if !(0..NANOS_PER_SECOND).contains(&nanos)
            || !(MIN_SECONDS..MAX_SECONDS_EXCLUSIVE).contains(&seconds)
        {
            return Err(Error::InvalidTimestamp { seconds, nanos });
        }
        Ok(Timestamp { seconds, nanos })
    }

    /// Create a timestamp from milliseconds since epoch
    pub fn from_millis(millis: i64) -> Result<Self> {
        let seconds = millis.div_euclid(1_000);
        let nanos = (millis.rem_euclid(1_000) * 1_000_000) as i32;
        Timestamp::new(seconds, nanos)
    }

    /// Create a timestamp from a UTC datetime
    pub fn from_datetime(dt: DateTime<Utc>) -> Result<Self> {
        Timestamp::new(dt.timestamp(), dt.timestamp_subsec_nanos() as i32)
    }

    /// Parse an RFC 3339 string such as `2021-01-01T00:00:00.123456789Z`
    ///
    /// Offsets other than `Z` are accepted and normalized to UTC.
    pub fn parse_rfc3339(s: &str) -> Result<Self> {
        let dt = DateTime::parse_from_rfc3339(s)
            .map_err(|e| Error::invalid_value(format!("bad timestamp '{}': {}", s, e)))?;
        Timestamp::from_datetime(dt.with_timezone(&Utc))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whole seconds since Unix epoch
    #[inline]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Nanosecond fraction, always in `0..1_000_000_000`
    #[inline]
    pub const fn nanos(&self) -> i32 {
        self.nanos
    }

    /// Milliseconds since Unix epoch (truncates sub-millisecond precision)
    pub fn to_millis(&self) -> i64 {
        self.seconds * 1_000 + i64::from(self.nanos / 1_000_000)
    }

    /// Convert to a chrono UTC datetime
    pub fn to_datetime(&self) -> DateTime<Utc> {
        // Range is validated at construction.
        DateTime::from_timestamp(self.seconds, self.nanos as u32).unwrap_or_default()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Timestamp::EPOCH
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.to_datetime().to_rfc3339_opts(SecondsFormat::AutoSi, true)
        )
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = Error;

    fn try_from(dt: DateTime<Utc>) -> Result<Self> {
        Timestamp::from_datetime(dt)
    }
}

// ============================================================================
// Tests
// ============================================================================
