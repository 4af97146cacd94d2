//! Proximity search over a candidate set of addresses.
//!
//! The search is a linear scan: every candidate is tested with
//! [`within_radius`] and kept in the order it was received. There is no
//! spatial index. Callers only see [`ProximityQuery`] and
//! [`crate::application::services::AddressService::find_nearby`], so an index
//! can later replace the scan without changing them.

use crate::domain::entities::Address;
use crate::domain::geo::{GeoPoint, ValidationError, within_radius};

/// A validated "everything within `radius_km` of `center`" query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityQuery {
    center: GeoPoint,
    radius_km: f64,
}

impl ProximityQuery {
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRadius`] unless `radius_km` is finite
    /// and strictly positive.
    pub fn new(center: GeoPoint, radius_km: f64) -> Result<Self, ValidationError> {
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(ValidationError::InvalidRadius(radius_km));
        }
        Ok(Self { center, radius_km })
    }

    pub fn center(&self) -> &GeoPoint {
        &self.center
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Runs this query over `candidates`. See [`find_nearby`].
    pub fn apply<I>(&self, candidates: I) -> Vec<Address>
    where
        I: IntoIterator<Item = Address>,
    {
        find_nearby(&self.center, self.radius_km, candidates)
    }
}

/// Keeps the addresses lying within `radius_km` of `reference`.
///
/// Stable: retained addresses keep their relative input order and are not
/// sorted by distance.
pub fn find_nearby<I>(reference: &GeoPoint, radius_km: f64, candidates: I) -> Vec<Address>
where
    I: IntoIterator<Item = Address>,
{
    candidates
        .into_iter()
        .filter(|address| within_radius(reference, &address.location, radius_km))
        .collect()
}
