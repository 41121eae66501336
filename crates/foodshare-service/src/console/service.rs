//! Ad-hoc query execution.
//!
//! The console accepts a user-supplied statement, requires it to be a
//! SELECT, and passes it to the driver verbatim. Driver errors come back
//! unchanged; there is no retry, caching, or pagination.

use sqlx::SqlitePool;
use tracing::debug;

use foodshare_core::error::AppError;
use foodshare_core::result::AppResult;
use foodshare_database::table::{self, QueryTable};

/// Executes user-supplied read-only queries.
#[derive(Debug, Clone)]
pub struct ConsoleService {
    /// Shared connection pool.
    pool: SqlitePool,
}

impl ConsoleService {
    /// Creates a new console service.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Runs `sql` verbatim after checking that it is a SELECT statement.
    pub async fn run(&self, sql: &str) -> AppResult<QueryTable> {
        let trimmed = sql.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("Query cannot be empty"));
        }
        if !is_select(trimmed) {
            return Err(AppError::validation(
                "Only SELECT queries are supported in the console",
            ));
        }

        debug!(sql = %trimmed, "Running console query");
        table::fetch_table(&self.pool, trimmed).await
    }
}

/// Leading-keyword check. CTEs and PRAGMA are rejected along with writes.
fn is_select(sql: &str) -> bool {
    sql.get(..6)
        .map(|prefix| prefix.eq_ignore_ascii_case("select"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodshare_core::error::ErrorKind;
    use foodshare_database::connection::DatabasePool;
    use foodshare_database::migration::run_migrations;

    async fn console() -> ConsoleService {
        let pool = DatabasePool::connect_in_memory().await.unwrap().into_pool();
        run_migrations(&pool).await.unwrap();
        sqlx::query(
            "INSERT INTO providers (id, name, kind, address, city, contact) \
             VALUES (1, 'Green Bistro', 'Restaurant', '12 Oak St', 'Chennai', 'g@example.com')",
        )
        .execute(&pool)
        .await
        .unwrap();
        ConsoleService::new(pool)
    }

    #[tokio::test]
    async fn test_select_passes_through() {
        let svc = console().await;
        let table = svc.run("SELECT name, city FROM providers").await.unwrap();
        assert_eq!(table.columns, vec!["name", "city"]);
        assert_eq!(table.rows[0][0], serde_json::json!("Green Bistro"));
    }

    #[tokio::test]
    async fn test_lowercase_select_is_accepted() {
        let svc = console().await;
        assert!(svc.run("  select count(*) from providers").await.is_ok());
    }

    #[tokio::test]
    async fn test_non_select_is_rejected() {
        let svc = console().await;
        for sql in [
            "DELETE FROM providers",
            "DROP TABLE providers",
            "UPDATE providers SET name = 'x'",
            "",
        ] {
            let err = svc.run(sql).await.unwrap_err();
            assert_eq!(err.kind, ErrorKind::Validation, "for: {sql}");
        }
    }

    #[tokio::test]
    async fn test_invalid_select_surfaces_driver_error() {
        let svc = console().await;
        let err = svc.run("SELECT * FROM no_such_table").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(err.message.contains("no_such_table"));
    }
}
