//! Geographic points and great-circle distance.
//!
//! A [`GeoPoint`] can only be built through [`GeoPoint::new`], so every point
//! that reaches [`distance`] or [`within_radius`] already lies inside the
//! valid latitude/longitude domain. Neither function re-validates its input.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Mean Earth radius used by the spherical model, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Valid latitude range in degrees.
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;

/// Valid longitude range in degrees.
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// Rejection raised by the checked constructors of the domain layer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("latitude must be between -90 and 90 degrees, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must be between -180 and 180 degrees, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("radius must be a finite number of kilometers greater than 0, got {0}")]
    InvalidRadius(f64),

    #[error("name must not be empty")]
    EmptyName,
}

impl ValidationError {
    /// Name of the offending input field, as it appears in the HTTP API.
    pub fn field(&self) -> &'static str {
        match self {
            Self::LatitudeOutOfRange(_) => "latitude",
            Self::LongitudeOutOfRange(_) => "longitude",
            Self::InvalidRadius(_) => "distance_km",
            Self::EmptyName => "name",
        }
    }
}

/// A validated (latitude, longitude) pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl GeoPoint {
    /// Creates a point, rejecting coordinates outside the valid domain.
    ///
    /// NaN is outside every range and is rejected as well.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::LatitudeOutOfRange`] unless `-90 <= latitude <= 90`
    /// - [`ValidationError::LongitudeOutOfRange`] unless `-180 <= longitude <= 180`
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ValidationError> {
        if !LATITUDE_RANGE.contains(&latitude) {
            return Err(ValidationError::LatitudeOutOfRange(latitude));
        }
        if !LONGITUDE_RANGE.contains(&longitude) {
            return Err(ValidationError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Great-circle distance between two points in kilometers (haversine formula).
///
/// The result is non-negative, zero for identical points and exactly
/// symmetric in its arguments: swapping the points only negates the deltas,
/// which the squared sines cancel, and the cosine product commutes.
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lon1 = p1.longitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let lon2 = p2.longitude.to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Returns true if `candidate` lies within `radius_km` of `center`.
///
/// The boundary is inclusive. `radius_km` is expected to be positive; see
/// [`crate::domain::proximity::ProximityQuery`].
pub fn within_radius(center: &GeoPoint, candidate: &GeoPoint, radius_km: f64) -> bool {
    distance(center, candidate) <= radius_km
}
