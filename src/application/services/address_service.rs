//! Address management and proximity search service.

use std::sync::Arc;

use crate::domain::entities::{Address, NewAddress};
use crate::domain::proximity::ProximityQuery;
use crate::domain::repositories::AddressRepository;
use crate::error::AppError;
use serde_json::json;

/// Service for address CRUD and radius search.
///
/// The storage handle is injected at construction; the service holds no
/// other state and can be shared freely behind an `Arc`.
pub struct AddressService {
    repository: Arc<dyn AddressRepository>,
}

impl AddressService {
    /// Creates a new address service.
    pub fn new(repository: Arc<dyn AddressRepository>) -> Self {
        Self { repository }
    }

    /// Stores a new address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_address(&self, new_address: NewAddress) -> Result<Address, AppError> {
        let address = self.repository.create(new_address).await?;
        tracing::info!(address_id = address.id, "Address created");
        Ok(address)
    }

    /// Retrieves an address by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no address has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_address(&self, id: i64) -> Result<Address, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Lists every stored address in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_addresses(&self) -> Result<Vec<Address>, AppError> {
        self.repository.list_all().await
    }

    /// Replaces every field of an existing address. The id is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no address has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn replace_address(&self, id: i64, fields: NewAddress) -> Result<Address, AppError> {
        let address = self
            .repository
            .replace(id, fields)
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(address_id = id, "Address replaced");
        Ok(address)
    }

    /// Permanently deletes an address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no address has this id.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_address(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!(address_id = id, "Address deleted");
        Ok(())
    }

    /// Returns the addresses within the query radius, in storage order.
    ///
    /// Loads the full candidate set and scans it linearly. Storage errors are
    /// propagated unchanged.
    pub async fn find_nearby(&self, query: &ProximityQuery) -> Result<Vec<Address>, AppError> {
        let candidates = self.repository.list_all().await?;
        let total = candidates.len();

        let nearby = query.apply(candidates);

        tracing::debug!(
            latitude = query.center().latitude(),
            longitude = query.center().longitude(),
            radius_km = query.radius_km(),
            candidates = total,
            matched = nearby.len(),
            "Proximity search completed"
        );

        Ok(nearby)
    }

    /// Counts stored addresses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count_addresses(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

fn not_found(id: i64) -> AppError {
    AppError::not_found("Address not found", json!({ "id": id }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::geo::GeoPoint;
    use crate::domain::repositories::MockAddressRepository;

    fn address(id: i64, lat: f64, lon: f64) -> Address {
        Address::new(id, format!("address-{id}"), GeoPoint::new(lat, lon).unwrap())
    }

    fn fields(name: &str, lat: f64, lon: f64) -> NewAddress {
        NewAddress::new(name.to_string(), lat, lon).unwrap()
    }

    fn service(repo: MockAddressRepository) -> AddressService {
        AddressService::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_address_success() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo
            .expect_create()
            .withf(|new_address| new_address.name == "Home")
            .times(1)
            .returning(|new_address| Ok(new_address.into_address(1)));

        let result = service(mock_repo)
            .create_address(fields("Home", 1.0, 2.0))
            .await;

        let created = result.unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(created.name, "Home");
    }

    #[tokio::test]
    async fn test_get_address_found() {
        let mut mock_repo = MockAddressRepository::new();

        let stored = address(5, 0.0, 0.0);
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 5)
            .times(1)
            .returning(move |_| Ok(Some(stored.clone())));

        let result = service(mock_repo).get_address(5).await;

        assert_eq!(result.unwrap().id, 5);
    }

    #[tokio::test]
    async fn test_get_address_not_found() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).get_address(404).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_replace_address_not_found() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo
            .expect_replace()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = service(mock_repo)
            .replace_address(3, fields("x", 0.0, 0.0))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_replace_address_success() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo
            .expect_replace()
            .withf(|id, fields| *id == 3 && fields.name == "Renamed")
            .times(1)
            .returning(|id, fields| Ok(Some(fields.into_address(id))));

        let result = service(mock_repo)
            .replace_address(3, fields("Renamed", 4.0, 5.0))
            .await
            .unwrap();

        assert_eq!(result.id, 3);
        assert_eq!(result.name, "Renamed");
        assert_eq!(result.longitude(), 5.0);
    }

    #[tokio::test]
    async fn test_delete_address_success() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo
            .expect_delete()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(mock_repo).delete_address(8).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_address_not_found() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo.expect_delete().times(1).returning(|_| Ok(false));

        let result = service(mock_repo).delete_address(8).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_find_nearby_filters_candidates() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                address(1, 0.0, 0.0),
                address(2, 0.0, 1.0),
                address(3, 10.0, 10.0),
            ])
        });

        let query = ProximityQuery::new(GeoPoint::new(0.0, 0.0).unwrap(), 150.0).unwrap();
        let result = service(mock_repo).find_nearby(&query).await.unwrap();

        let ids: Vec<i64> = result.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_find_nearby_propagates_storage_errors() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo
            .expect_list_all()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let query = ProximityQuery::new(GeoPoint::new(0.0, 0.0).unwrap(), 1.0).unwrap();
        let result = service(mock_repo).find_nearby(&query).await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_count_addresses() {
        let mut mock_repo = MockAddressRepository::new();

        mock_repo.expect_count().times(1).returning(|| Ok(12));

        assert_eq!(service(mock_repo).count_addresses().await.unwrap(), 12);
    }
}
