//! Address repository implementations.
//!
//! # Repositories
//!
//! - [`PgAddressRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryAddressRepository`] - Process-local storage for development and tests

pub mod memory_address_repository;
pub mod pg_address_repository;

pub use memory_address_repository::InMemoryAddressRepository;
pub use pg_address_repository::PgAddressRepository;
