//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`Address`] - A stored, named geographic point
//! - [`NewAddress`] - Validated fields for creating or replacing an address

pub mod address;

pub use address::{Address, NewAddress};
