//! Geographic point type

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in degrees
///
/// ## Invariants
///
/// - latitude is finite and in `[-90, 90]`
/// - longitude is finite and in `[-180, 180]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeoPointRepr")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

/// Unchecked serde shape of a `GeoPoint`
#[derive(Deserialize)]
struct GeoPointRepr {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<GeoPointRepr> for GeoPoint {
    type Error = Error;

    fn try_from(repr: GeoPointRepr) -> Result<Self> {
        GeoPoint::new(repr.latitude, repr.longitude)
    }
}

impl GeoPoint {
    /// Create a geo point, validating the range
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidGeoPoint` for non-finite or out-of-range input.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let lat_ok = latitude.is_finite() && (-90.0..=90.0).contains(&latitude);
        let lng_ok = longitude.is_finite() && (-180.0..=180.0).contains(&longitude);
        if !lat_ok || !lng_ok {
            return Err(Error::InvalidGeoPoint {
                latitude,
                longitude,
            });
        }
        Ok(GeoPoint {
            latitude,
            longitude,
        })
    }

    /// Latitude in degrees
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
