//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::AddressService;
use crate::domain::repositories::AddressRepository;

#[derive(Clone)]
pub struct AppState {
    pub address_service: Arc<AddressService>,
}

impl AppState {
    /// Wires the services around the given storage handle.
    pub fn new(repository: Arc<dyn AddressRepository>) -> Self {
        Self {
            address_service: Arc::new(AddressService::new(repository)),
        }
    }
}
