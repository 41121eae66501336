//! Catalog query execution.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use foodshare_core::error::AppError;
use foodshare_core::result::AppResult;
use foodshare_database::table::{self, QueryTable};

use super::catalog::{self, CATALOG};

/// Catalog entry metadata returned by the index operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Stable identifier.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
}

/// The outcome of running one catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResult {
    /// Stable identifier.
    pub slug: String,
    /// Human-readable title.
    pub title: String,
    /// The result set, rendered as-is.
    pub table: QueryTable,
}

/// Executes the fixed analytics catalog against the shared pool.
#[derive(Debug, Clone)]
pub struct AnalyticsService {
    /// Shared connection pool.
    pool: SqlitePool,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Lists all catalog entries in display order.
    pub fn reports(&self) -> Vec<ReportSummary> {
        CATALOG
            .iter()
            .map(|report| ReportSummary {
                slug: report.slug.to_string(),
                title: report.title.to_string(),
            })
            .collect()
    }

    /// Runs one catalog entry by slug.
    pub async fn run(&self, slug: &str) -> AppResult<ReportResult> {
        let report = catalog::find(slug)
            .ok_or_else(|| AppError::not_found(format!("Unknown report '{slug}'")))?;

        let table = table::fetch_table(&self.pool, report.sql).await?;
        Ok(ReportResult {
            slug: report.slug.to_string(),
            title: report.title.to_string(),
            table,
        })
    }
}
