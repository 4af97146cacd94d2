//! API route configuration.

use crate::api::handlers::{
    create_address_handler, delete_address_handler, get_address_handler, health_handler,
    list_addresses_handler, nearby_addresses_handler, update_address_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Address routes.
///
/// # Endpoints
///
/// - `POST   /addresses`          - Create an address
/// - `GET    /addresses`          - List all addresses
/// - `GET    /addresses/nearby`   - Addresses within a radius of a point
/// - `GET    /addresses/{id}`     - Fetch one address
/// - `PUT    /addresses/{id}`     - Replace all fields of an address
/// - `DELETE /addresses/{id}`     - Delete an address
pub fn address_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/addresses",
            get(list_addresses_handler).post(create_address_handler),
        )
        .route("/addresses/nearby", get(nearby_addresses_handler))
        .route(
            "/addresses/{id}",
            get(get_address_handler)
                .put(update_address_handler)
                .delete(delete_address_handler),
        )
}

/// Service routes that are not subject to rate limiting.
///
/// - `GET /health` - Health check
pub fn service_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
