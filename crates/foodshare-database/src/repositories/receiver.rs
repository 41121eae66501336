//! Receiver repository implementation.

use sqlx::SqlitePool;

use foodshare_core::error::{AppError, ErrorKind};
use foodshare_core::result::AppResult;
use foodshare_entity::receiver::Receiver;

/// Repository for receiver reads. Receivers are reference data and have
/// no write operations.
#[derive(Debug, Clone)]
pub struct ReceiverRepository {
    pool: SqlitePool,
}

impl ReceiverRepository {
    /// Create a new receiver repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all receivers ordered by name.
    pub async fn find_all(&self) -> AppResult<Vec<Receiver>> {
        sqlx::query_as::<_, Receiver>("SELECT * FROM receivers ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to list receivers: {e}"), e)
            })
    }

    /// Find a receiver by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Receiver>> {
        sqlx::query_as::<_, Receiver>("SELECT * FROM receivers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find receiver: {e}"), e)
            })
    }
}
