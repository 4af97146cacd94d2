//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/addresses/*` - Address API (rate limited)
//! - `GET /health`  - Health check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket (configurable for proxy deployments)
//! - **Path normalization** - Trailing slash handling, so `/addresses/` and
//!   `/addresses/nearby/` resolve like their slash-less forms

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let address_router = api::routes::address_routes();
    let address_router = if behind_proxy {
        address_router.layer(rate_limit::proxied_layer())
    } else {
        address_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .merge(address_router)
        .merge(api::routes::service_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Router without rate limiting or path normalization.
///
/// Rate limiting needs the peer address from `ConnectInfo`, which in-process
/// test clients do not provide.
pub fn plain_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::address_routes())
        .merge(api::routes::service_routes())
        .with_state(state)
}
