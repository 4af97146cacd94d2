#![allow(dead_code)]

use address_book::domain::entities::{Address, NewAddress};
use address_book::domain::repositories::AddressRepository;
use address_book::infrastructure::persistence::InMemoryAddressRepository;
use address_book::routes::plain_router;
use address_book::state::AppState;
use axum_test::TestServer;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryAddressRepository>) {
    let repository = Arc::new(InMemoryAddressRepository::new());
    let state = AppState::new(repository.clone());
    (state, repository)
}

pub fn make_server() -> (TestServer, Arc<InMemoryAddressRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(plain_router(state)).unwrap();
    (server, repository)
}

pub async fn create_test_address(
    repository: &InMemoryAddressRepository,
    name: &str,
    latitude: f64,
    longitude: f64,
) -> Address {
    repository
        .create(NewAddress::new(name.to_string(), latitude, longitude).unwrap())
        .await
        .unwrap()
}
