//! Repository trait for address data access.

use crate::domain::entities::{Address, NewAddress};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing addresses.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAddressRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryAddressRepository`] - Process-local map
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_address.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddressRepository: Send + Sync {
    /// Stores a new address and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_address: NewAddress) -> Result<Address, AppError>;

    /// Finds an address by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, AppError>;

    /// Returns every stored address, ordered by id ascending.
    ///
    /// This is the candidate set of a proximity search.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list_all(&self) -> Result<Vec<Address>, AppError>;

    /// Replaces all fields of an existing address.
    ///
    /// Returns `Ok(None)` if no address has this id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn replace(&self, id: i64, fields: NewAddress) -> Result<Option<Address>, AppError>;

    /// Permanently removes an address.
    ///
    /// Returns `Ok(true)` if a row was removed, `Ok(false)` if the id was unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Counts stored addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;
}
