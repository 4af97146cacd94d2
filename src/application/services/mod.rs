//! Business logic services for the application layer.

pub mod address_service;

pub use address_service::AddressService;
