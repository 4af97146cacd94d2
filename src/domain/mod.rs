//! Domain layer containing business entities and logic.
//!
//! This module holds the parts of the address book that are independent of
//! storage and transport.
//!
//! # Architecture
//!
//! - [`geo`] - Validated coordinates and great-circle distance
//! - [`proximity`] - Radius search over a candidate set
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Invalid coordinates are unrepresentable: [`geo::GeoPoint`] is only built
//!   through a checked constructor
//! - Repository traits define contracts implemented by infrastructure layer
//!
//! # Proximity Query Flow
//!
//! 1. HTTP handler validates `lat`, `lon` and `distance_km`
//! 2. A [`proximity::ProximityQuery`] is built from the validated values
//! 3. [`repositories::AddressRepository::list_all`] yields the candidate set
//! 4. [`proximity::find_nearby`] keeps the candidates within the radius

pub mod entities;
pub mod geo;
pub mod proximity;
pub mod repositories;
