//! Provider repository implementation.

use sqlx::SqlitePool;

use foodshare_core::error::{AppError, ErrorKind};
use foodshare_core::result::AppResult;
use foodshare_entity::provider::{CreateProvider, Provider, ProviderContact, UpdateProvider};

/// Repository for provider reads and admin CRUD.
#[derive(Debug, Clone)]
pub struct ProviderRepository {
    pool: SqlitePool,
}

impl ProviderRepository {
    /// Create a new provider repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all providers ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Provider>> {
        sqlx::query_as::<_, Provider>("SELECT * FROM providers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to list providers: {e}"), e)
            })
    }

    /// Find a provider by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Provider>> {
        sqlx::query_as::<_, Provider>("SELECT * FROM providers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find provider: {e}"), e)
            })
    }

    /// Name and contact of every provider in a city, ordered by name.
    pub async fn contacts_by_city(&self, city: &str) -> AppResult<Vec<ProviderContact>> {
        sqlx::query_as::<_, ProviderContact>(
            "SELECT name, contact FROM providers WHERE city = ? ORDER BY name ASC",
        )
        .bind(city)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to look up provider contacts: {e}"),
                e,
            )
        })
    }

    /// Create a new provider.
    pub async fn create(&self, data: &CreateProvider) -> AppResult<Provider> {
        sqlx::query_as::<_, Provider>(
            "INSERT INTO providers (name, kind, address, city, contact) \
             VALUES (?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.kind)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.contact)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to create provider: {e}"), e)
        })
    }

    /// Apply a partial update. Unset fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateProvider) -> AppResult<Provider> {
        sqlx::query_as::<_, Provider>(
            "UPDATE providers SET \
                name = COALESCE(?, name), \
                kind = COALESCE(?, kind), \
                address = COALESCE(?, address), \
                city = COALESCE(?, city), \
                contact = COALESCE(?, contact) \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.kind)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.contact)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to update provider: {e}"), e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Provider {id} not found")))
    }
}
