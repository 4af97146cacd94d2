//! DTOs for address endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{Address, NewAddress};
use crate::domain::geo::{GeoPoint, ValidationError};
use crate::domain::proximity::ProximityQuery;

/// Body of `POST /addresses` and `PUT /addresses/{id}`.
///
/// Both endpoints take every field; an update replaces the whole record.
#[derive(Debug, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

impl TryFrom<AddressRequest> for NewAddress {
    type Error = ValidationError;

    fn try_from(request: AddressRequest) -> Result<Self, Self::Error> {
        NewAddress::new(request.name, request.latitude, request.longitude)
    }
}

/// Public representation of a stored address.
#[derive(Debug, Serialize)]
pub struct AddressResponse {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            latitude: address.latitude(),
            longitude: address.longitude(),
            name: address.name,
        }
    }
}

/// Query string of `GET /addresses/nearby`.
#[derive(Debug, Deserialize, Validate)]
pub struct NearbyParams {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "Longitude must be between -180 and 180"
    ))]
    pub lon: f64,

    #[validate(range(exclusive_min = 0.0, message = "Distance must be greater than 0"))]
    pub distance_km: f64,
}

impl TryFrom<NearbyParams> for ProximityQuery {
    type Error = ValidationError;

    fn try_from(params: NearbyParams) -> Result<Self, Self::Error> {
        let center = GeoPoint::new(params.lat, params.lon)?;
        ProximityQuery::new(center, params.distance_km)
    }
}
