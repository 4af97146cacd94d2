//! PostgreSQL implementation of address repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Address, NewAddress};
use crate::domain::geo::GeoPoint;
use crate::domain::repositories::AddressRepository;
use crate::error::AppError;

#[derive(Debug, FromRow)]
struct AddressRow {
    id: i64,
    name: String,
    latitude: f64,
    longitude: f64,
}

impl TryFrom<AddressRow> for Address {
    type Error = AppError;

    fn try_from(row: AddressRow) -> Result<Self, Self::Error> {
        // The table CHECK constraints mirror the GeoPoint domain, so this only
        // fails if the schema was altered out of band.
        let location = GeoPoint::new(row.latitude, row.longitude).map_err(|e| {
            tracing::error!(address_id = row.id, error = %e, "Stored address has invalid coordinates");
            AppError::internal(
                "Stored address has invalid coordinates",
                json!({ "id": row.id }),
            )
        })?;

        Ok(Address::new(row.id, row.name, location))
    }
}

/// PostgreSQL repository for address storage.
///
/// Uses SQLx prepared statements for SQL injection protection and type safety.
pub struct PgAddressRepository {
    pool: Arc<PgPool>,
}

impl PgAddressRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn create(&self, new_address: NewAddress) -> Result<Address, AppError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r#"
            INSERT INTO addresses (name, latitude, longitude)
            VALUES ($1, $2, $3)
            RETURNING id, name, latitude, longitude
            "#,
        )
        .bind(&new_address.name)
        .bind(new_address.location.latitude())
        .bind(new_address.location.longitude())
        .fetch_one(self.pool.as_ref())
        .await?;

        row.try_into()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Address>, AppError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, name, latitude, longitude
            FROM addresses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Address::try_from).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Address>, AppError> {
        let rows = sqlx::query_as::<_, AddressRow>(
            r#"
            SELECT id, name, latitude, longitude
            FROM addresses
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Address::try_from).collect()
    }

    async fn replace(&self, id: i64, fields: NewAddress) -> Result<Option<Address>, AppError> {
        let row = sqlx::query_as::<_, AddressRow>(
            r#"
            UPDATE addresses SET
                name      = $2,
                latitude  = $3,
                longitude = $4
            WHERE id = $1
            RETURNING id, name, latitude, longitude
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(fields.location.latitude())
        .bind(fields.location.longitude())
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Address::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM addresses WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM addresses")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
