//! Handlers for address endpoints (CRUD and proximity search).
//!
//! Extractor rejections are taken as `Result`s and converted into
//! [`AppError`], so malformed input gets the same JSON error envelope as a
//! failed range check.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::address::{AddressRequest, AddressResponse, NearbyParams};
use crate::domain::entities::{Address, NewAddress};
use crate::domain::proximity::ProximityQuery;
use crate::error::AppError;
use crate::state::AppState;

fn to_response_list(addresses: Vec<Address>) -> Json<Vec<AddressResponse>> {
    Json(addresses.into_iter().map(AddressResponse::from).collect())
}

fn validated_fields(
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<NewAddress, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    Ok(NewAddress::try_from(payload)?)
}

/// Creates a new address.
///
/// # Endpoint
///
/// `POST /addresses`
///
/// # Request Body
///
/// ```json
/// { "name": "Home", "latitude": 52.52, "longitude": 13.405 }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed, the name is empty, or a coordinate
/// is out of range.
pub async fn create_address_handler(
    State(state): State<AppState>,
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddressResponse>), AppError> {
    let new_address = validated_fields(payload)?;

    let address = state.address_service.create_address(new_address).await?;

    Ok((StatusCode::CREATED, Json(address.into())))
}

/// Lists every stored address.
///
/// # Endpoint
///
/// `GET /addresses`
pub async fn list_addresses_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressResponse>>, AppError> {
    let addresses = state.address_service.list_addresses().await?;
    Ok(to_response_list(addresses))
}

/// Lists the addresses within `distance_km` of a reference point.
///
/// # Endpoint
///
/// `GET /addresses/nearby?lat={lat}&lon={lon}&distance_km={km}`
///
/// # Query Parameters
///
/// - `lat` (required): reference latitude, -90..=90
/// - `lon` (required): reference longitude, -180..=180
/// - `distance_km` (required): search radius in kilometers, > 0
///
/// # Response
///
/// Matching addresses in storage order (not sorted by distance). An address
/// exactly `distance_km` away is included.
///
/// # Errors
///
/// Returns 400 if a parameter is missing, not a number, or out of range.
pub async fn nearby_addresses_handler(
    State(state): State<AppState>,
    params: Result<Query<NearbyParams>, QueryRejection>,
) -> Result<Json<Vec<AddressResponse>>, AppError> {
    let Query(params) = params?;
    params.validate()?;
    let query = ProximityQuery::try_from(params)?;

    let addresses = state.address_service.find_nearby(&query).await?;

    Ok(to_response_list(addresses))
}

/// Retrieves a single address.
///
/// # Endpoint
///
/// `GET /addresses/{id}`
///
/// # Errors
///
/// Returns 404 if no address has this id.
pub async fn get_address_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<AddressResponse>, AppError> {
    let Path(id) = id?;

    let address = state.address_service.get_address(id).await?;

    Ok(Json(address.into()))
}

/// Replaces every field of an address.
///
/// # Endpoint
///
/// `PUT /addresses/{id}`
///
/// The body has the same shape and rules as `POST /addresses`.
///
/// # Errors
///
/// Returns 400 on invalid input.
/// Returns 404 if no address has this id.
pub async fn update_address_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AddressRequest>, JsonRejection>,
) -> Result<Json<AddressResponse>, AppError> {
    let Path(id) = id?;
    let fields = validated_fields(payload)?;

    let address = state.address_service.replace_address(id, fields).await?;

    Ok(Json(address.into()))
}

/// Permanently deletes an address.
///
/// # Endpoint
///
/// `DELETE /addresses/{id}`
///
/// # Errors
///
/// Returns 404 if no address has this id.
pub async fn delete_address_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state.address_service.delete_address(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
