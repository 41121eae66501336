//! Listing repository implementation.

use sqlx::SqlitePool;

use foodshare_core::error::{AppError, ErrorKind};
use foodshare_core::result::AppResult;
use foodshare_entity::listing::{
    CreateListing, Listing, ListingFilter, ListingWithProvider, UpdateListing,
};

/// Columns selected for the provider-joined listing view.
const JOINED_SELECT: &str = "SELECT l.id, l.food_name, l.quantity, l.expiry_date, \
     l.provider_id, l.location, l.food_type, l.meal_type, \
     p.name AS provider_name, p.contact AS provider_contact \
     FROM listings l JOIN providers p ON l.provider_id = p.id";

/// Repository for listing CRUD and filtered search.
#[derive(Debug, Clone)]
pub struct ListingRepository {
    pool: SqlitePool,
}

impl ListingRepository {
    /// Create a new listing repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find a listing by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Listing>> {
        sqlx::query_as::<_, Listing>("SELECT * FROM listings WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to find listing: {e}"), e)
            })
    }

    /// Count all listings.
    pub async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM listings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to count listings: {e}"), e)
            })
    }

    /// Search listings with optional filters, joined with provider
    /// contact fields and ordered by ascending expiry date.
    pub async fn search(&self, filter: &ListingFilter) -> AppResult<Vec<ListingWithProvider>> {
        let mut sql = format!("{JOINED_SELECT} WHERE 1 = 1");
        if filter.location.is_some() {
            sql.push_str(" AND l.location = ?");
        }
        if filter.food_type.is_some() {
            sql.push_str(" AND l.food_type = ?");
        }
        if filter.meal_type.is_some() {
            sql.push_str(" AND l.meal_type = ?");
        }
        sql.push_str(" ORDER BY l.expiry_date ASC");

        let mut query = sqlx::query_as::<_, ListingWithProvider>(&sql);
        if let Some(location) = &filter.location {
            query = query.bind(location);
        }
        if let Some(food_type) = filter.food_type {
            query = query.bind(food_type);
        }
        if let Some(meal_type) = filter.meal_type {
            query = query.bind(meal_type);
        }

        query.fetch_all(&self.pool).await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to search listings: {e}"), e)
        })
    }

    /// Distinct cities that currently have listings, ordered alphabetically.
    pub async fn distinct_locations(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar("SELECT DISTINCT location FROM listings ORDER BY location ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to list locations: {e}"), e)
            })
    }

    /// Create a new listing.
    pub async fn create(&self, data: &CreateListing) -> AppResult<Listing> {
        sqlx::query_as::<_, Listing>(
            "INSERT INTO listings \
             (food_name, quantity, expiry_date, provider_id, location, food_type, meal_type) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING *",
        )
        .bind(&data.food_name)
        .bind(data.quantity)
        .bind(data.expiry_date)
        .bind(data.provider_id)
        .bind(&data.location)
        .bind(data.food_type)
        .bind(data.meal_type)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to create listing: {e}"), e)
        })
    }

    /// Apply a partial update. Unset fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateListing) -> AppResult<Listing> {
        sqlx::query_as::<_, Listing>(
            "UPDATE listings SET \
                food_name = COALESCE(?, food_name), \
                quantity = COALESCE(?, quantity), \
                expiry_date = COALESCE(?, expiry_date), \
                location = COALESCE(?, location), \
                food_type = COALESCE(?, food_type), \
                meal_type = COALESCE(?, meal_type) \
             WHERE id = ? RETURNING *",
        )
        .bind(&data.food_name)
        .bind(data.quantity)
        .bind(data.expiry_date)
        .bind(&data.location)
        .bind(data.food_type)
        .bind(data.meal_type)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Failed to update listing: {e}"), e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Listing {id} not found")))
    }

    /// Delete a listing. Claims against it are removed by the cascade.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM listings WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, format!("Failed to delete listing: {e}"), e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
