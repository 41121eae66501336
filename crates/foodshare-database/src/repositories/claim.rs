//! Claim repository implementation.

use sqlx::SqlitePool;

use foodshare_core::error::{AppError, ErrorKind};
use foodshare_core::result::AppResult;
use foodshare_entity::claim::{Claim, ClaimStatus};

/// Repository for claim reads. Claims have no creation workflow in this
/// system; rows arrive through the seed exports.
#[derive(Debug, Clone)]
pub struct ClaimRepository {
    pool: SqlitePool,
}

impl ClaimRepository {
    /// Create a new claim repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List claims, optionally restricted to a status, newest first.
    pub async fn find_all(&self, status: Option<ClaimStatus>) -> AppResult<Vec<Claim>> {
        let result = match status {
            Some(status) => {
                sqlx::query_as::<_, Claim>(
                    "SELECT * FROM claims WHERE status = ? ORDER BY created_at DESC",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Claim>("SELECT * FROM claims ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to list claims: {e}"), e)
        })
    }

    /// Find a claim by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Claim>> {
        sqlx::query_as::<_, Claim>("SELECT * FROM claims WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find claim: {e}"), e)
            })
    }
}
