//! PostgreSQL repository tests.
//!
//! Run with a database available:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --features postgres-tests
//! ```
#![cfg(feature = "postgres-tests")]

use address_book::domain::entities::NewAddress;
use address_book::domain::geo::GeoPoint;
use address_book::domain::proximity::ProximityQuery;
use address_book::domain::repositories::AddressRepository;
use address_book::infrastructure::persistence::PgAddressRepository;
use address_book::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

fn fields(name: &str, latitude: f64, longitude: f64) -> NewAddress {
    NewAddress::new(name.to_string(), latitude, longitude).unwrap()
}

#[sqlx::test]
async fn test_create_address(pool: PgPool) {
    let repo = PgAddressRepository::new(Arc::new(pool));

    let result = repo.create(fields("Home", 52.52, 13.405)).await;

    assert!(result.is_ok());
    let address = result.unwrap();
    assert!(address.id > 0);
    assert_eq!(address.name, "Home");
    assert_eq!(address.latitude(), 52.52);
    assert_eq!(address.longitude(), 13.405);
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgAddressRepository::new(Arc::new(pool));

    let created = repo.create(fields("find-me", 1.0, 2.0)).await.unwrap();

    let found = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(found, Some(created));

    assert!(repo.find_by_id(999_999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_all_ordered_by_id(pool: PgPool) {
    let repo = PgAddressRepository::new(Arc::new(pool));

    for i in 1..=3 {
        repo.create(fields(&format!("list-test-{}", i), 0.0, 0.0))
            .await
            .unwrap();
    }

    let addresses = repo.list_all().await.unwrap();

    assert_eq!(addresses.len(), 3);
    assert!(addresses.windows(2).all(|w| w[0].id < w[1].id));
    assert_eq!(addresses[0].name, "list-test-1");
}

#[sqlx::test]
async fn test_replace_address(pool: PgPool) {
    let repo = PgAddressRepository::new(Arc::new(pool));

    let created = repo.create(fields("before", 0.0, 0.0)).await.unwrap();

    let replaced = repo
        .replace(created.id, fields("after", -33.87, 151.21))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(replaced.id, created.id);
    assert_eq!(replaced.name, "after");
    assert_eq!(replaced.latitude(), -33.87);

    assert!(
        repo.replace(999_999, fields("ghost", 0.0, 0.0))
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test]
async fn test_delete_address(pool: PgPool) {
    let repo = PgAddressRepository::new(Arc::new(pool));

    let created = repo.create(fields("bye", 0.0, 0.0)).await.unwrap();

    assert!(repo.delete(created.id).await.unwrap());
    assert!(!repo.delete(created.id).await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_check_constraint_rejects_invalid_row(pool: PgPool) {
    let result = sqlx::query("INSERT INTO addresses (name, latitude, longitude) VALUES ($1, $2, $3)")
        .bind("bad")
        .bind(95.0_f64)
        .bind(0.0_f64)
        .execute(&pool)
        .await;

    assert!(result.is_err());
}

#[sqlx::test]
async fn test_find_nearby_through_service(pool: PgPool) {
    let repo = Arc::new(PgAddressRepository::new(Arc::new(pool)));

    repo.create(fields("origin", 0.0, 0.0)).await.unwrap();
    repo.create(fields("east", 0.0, 1.0)).await.unwrap();
    repo.create(fields("far", 10.0, 10.0)).await.unwrap();

    let state = AppState::new(repo);
    let query = ProximityQuery::new(GeoPoint::new(0.0, 0.0).unwrap(), 150.0).unwrap();

    let nearby = state.address_service.find_nearby(&query).await.unwrap();

    let names: Vec<&str> = nearby.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["origin", "east"]);
}
