//! In-process address storage.

use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Address, NewAddress};
use crate::domain::repositories::AddressRepository;
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    last_id: i64,
    addresses: BTreeMap<i64, Address>,
}

/// An address repository backed by an ordered map.
///
/// Ids start at 1 and are never reused, even after deletion. Contents are
/// lost when the process exits.
///
/// # Use Cases
///
/// - Development without PostgreSQL (`STORAGE_BACKEND=memory`)
/// - HTTP tests that should not depend on a database
pub struct InMemoryAddressRepository {
    inner: RwLock<Inner>,
}

impl InMemoryAddressRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        debug!("Using in-memory address storage");
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }
}

impl Default for InMemoryAddressRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressRepository for InMemoryAddressRepository {
    async fn create(&self, new_address: NewAddress) -> Result<Address, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let address = new_address.into_address(inner.last_id);
        inner.addresses.insert(address.id, address.clone());
        Ok(address)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, AppError> {
        Ok(self.inner.read().await.addresses.get(&id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Address>, AppError> {
        Ok(self.inner.read().await.addresses.values().cloned().collect())
    }

    async fn replace(&self, id: i64, fields: NewAddress) -> Result<Option<Address>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(slot) = inner.addresses.get_mut(&id) else {
            return Ok(None);
        };
        *slot = fields.into_address(id);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.addresses.remove(&id).is_some())
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.inner.read().await.addresses.len() as i64)
    }
}
