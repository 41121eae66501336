//! CSV seed loader.
//!
//! The database is seeded from four companion exports living in the
//! configured seed directory: `providers.csv`, `receivers.csv`,
//! `listings.csv`, and `claims.csv`. Rows are inserted with their
//! exported ids inside a single transaction so a malformed file leaves
//! the database untouched.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use sqlx::SqlitePool;
use tracing::info;

use foodshare_core::error::{AppError, ErrorKind};
use foodshare_core::result::AppResult;
use foodshare_entity::claim::ClaimStatus;
use foodshare_entity::listing::{FoodType, MealType};

/// Row counts loaded by a seed run.
#[derive(Debug, Clone, Copy, Default, serde::Serialize)]
pub struct SeedReport {
    /// Providers inserted.
    pub providers: u64,
    /// Receivers inserted.
    pub receivers: u64,
    /// Listings inserted.
    pub listings: u64,
    /// Claims inserted.
    pub claims: u64,
}

#[derive(Debug, Deserialize)]
struct ProviderRecord {
    id: i64,
    name: String,
    kind: String,
    address: String,
    city: String,
    contact: String,
}

#[derive(Debug, Deserialize)]
struct ReceiverRecord {
    id: i64,
    name: String,
    kind: String,
    city: String,
    contact: String,
}

#[derive(Debug, Deserialize)]
struct ListingRecord {
    id: i64,
    food_name: String,
    quantity: i64,
    expiry_date: NaiveDate,
    provider_id: i64,
    location: String,
    food_type: FoodType,
    meal_type: MealType,
}

#[derive(Debug, Deserialize)]
struct ClaimRecord {
    id: i64,
    listing_id: i64,
    receiver_id: i64,
    status: ClaimStatus,
    created_at: DateTime<Utc>,
}

/// Seed the database from `dir` if all four tables are empty.
///
/// Returns `None` when any table already holds rows and nothing was
/// loaded; a partially populated database is never overwritten.
pub async fn seed_if_empty(pool: &SqlitePool, dir: &Path) -> AppResult<Option<SeedReport>> {
    for table in ["providers", "receivers", "listings", "claims"] {
        let existing: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count {table}"), e)
            })?;

        if existing > 0 {
            info!(table, "Seed skipped, database already populated");
            return Ok(None);
        }
    }

    load(pool, dir).await.map(Some)
}

/// Wipe all four tables and reload them from `dir`.
pub async fn reseed(pool: &SqlitePool, dir: &Path) -> AppResult<SeedReport> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

    // Children before parents, foreign keys are enforced.
    for table in ["claims", "listings", "receivers", "providers"] {
        sqlx::query(&format!("DELETE FROM {table}"))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to clear {table}"), e)
            })?;
    }

    let report = load_into(&mut tx, dir).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seed", e))?;

    info!(
        providers = report.providers,
        receivers = report.receivers,
        listings = report.listings,
        claims = report.claims,
        "Seed data reloaded"
    );
    Ok(report)
}

async fn load(pool: &SqlitePool, dir: &Path) -> AppResult<SeedReport> {
    let mut tx = pool
        .begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))?;

    let report = load_into(&mut tx, dir).await?;

    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit seed", e))?;

    info!(
        providers = report.providers,
        receivers = report.receivers,
        listings = report.listings,
        claims = report.claims,
        "Seed data loaded"
    );
    Ok(report)
}

async fn load_into(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    dir: &Path,
) -> AppResult<SeedReport> {
    let mut report = SeedReport::default();

    for record in read_csv::<ProviderRecord>(&dir.join("providers.csv"))? {
        sqlx::query(
            "INSERT INTO providers (id, name, kind, address, city, contact) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.kind)
        .bind(&record.address)
        .bind(&record.city)
        .bind(&record.contact)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert provider {}", record.id),
                e,
            )
        })?;
        report.providers += 1;
    }

    for record in read_csv::<ReceiverRecord>(&dir.join("receivers.csv"))? {
        sqlx::query(
            "INSERT INTO receivers (id, name, kind, city, contact) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.kind)
        .bind(&record.city)
        .bind(&record.contact)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert receiver {}", record.id),
                e,
            )
        })?;
        report.receivers += 1;
    }

    for record in read_csv::<ListingRecord>(&dir.join("listings.csv"))? {
        sqlx::query(
            "INSERT INTO listings \
             (id, food_name, quantity, expiry_date, provider_id, location, food_type, meal_type) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(record.id)
        .bind(&record.food_name)
        .bind(record.quantity)
        .bind(record.expiry_date)
        .bind(record.provider_id)
        .bind(&record.location)
        .bind(record.food_type)
        .bind(record.meal_type)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert listing {}", record.id),
                e,
            )
        })?;
        report.listings += 1;
    }

    for record in read_csv::<ClaimRecord>(&dir.join("claims.csv"))? {
        sqlx::query(
            "INSERT INTO claims (id, listing_id, receiver_id, status, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.id)
        .bind(record.listing_id)
        .bind(record.receiver_id)
        .bind(record.status)
        .bind(record.created_at)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to insert claim {}", record.id),
                e,
            )
        })?;
        report.claims += 1;
    }

    Ok(report)
}

fn read_csv<T: serde::de::DeserializeOwned>(path: &PathBuf) -> AppResult<Vec<T>> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        AppError::with_source(
            ErrorKind::Configuration,
            format!("Failed to open seed file '{}': {e}", path.display()),
            e,
        )
    })?;

    reader
        .deserialize()
        .map(|row| {
            row.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Serialization,
                    format!("Malformed row in '{}': {e}", path.display()),
                    e,
                )
            })
        })
        .collect()
}
