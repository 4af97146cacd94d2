//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod addresses;
pub mod health;

pub use addresses::{
    create_address_handler, delete_address_handler, get_address_handler, list_addresses_handler,
    nearby_addresses_handler, update_address_handler,
};
pub use health::health_handler;
