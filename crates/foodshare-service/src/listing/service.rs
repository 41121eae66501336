//! Listing CRUD operations.

use std::sync::Arc;

use tracing::info;

use foodshare_core::error::AppError;
use foodshare_core::result::AppResult;
use foodshare_database::repositories::listing::ListingRepository;
use foodshare_database::repositories::provider::ProviderRepository;
use foodshare_entity::listing::{CreateListing, Listing, UpdateListing};

/// Manages the listing CRUD lifecycle.
#[derive(Debug, Clone)]
pub struct ListingService {
    /// Listing repository.
    listing_repo: Arc<ListingRepository>,
    /// Provider repository, used to verify the owning provider exists.
    provider_repo: Arc<ProviderRepository>,
}

impl ListingService {
    /// Creates a new listing service.
    pub fn new(listing_repo: Arc<ListingRepository>, provider_repo: Arc<ProviderRepository>) -> Self {
        Self {
            listing_repo,
            provider_repo,
        }
    }

    /// Gets a listing by ID.
    pub async fn get_listing(&self, id: i64) -> AppResult<Listing> {
        self.listing_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Listing {id} not found")))
    }

    /// Creates a new listing after validating its fields and owner.
    pub async fn create_listing(&self, data: CreateListing) -> AppResult<Listing> {
        if data.food_name.trim().is_empty() {
            return Err(AppError::validation("Food name cannot be empty"));
        }
        if data.location.trim().is_empty() {
            return Err(AppError::validation("Location cannot be empty"));
        }
        if data.quantity < 0 {
            return Err(AppError::validation("Quantity must be non-negative"));
        }

        self.provider_repo
            .find_by_id(data.provider_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!("Provider {} not found", data.provider_id))
            })?;

        let listing = self.listing_repo.create(&data).await?;
        info!(listing_id = listing.id, provider_id = listing.provider_id, "Listing created");
        Ok(listing)
    }

    /// Applies a partial update to a listing.
    pub async fn update_listing(&self, id: i64, data: UpdateListing) -> AppResult<Listing> {
        if data.is_empty() {
            return self.get_listing(id).await;
        }
        if let Some(name) = &data.food_name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Food name cannot be empty"));
            }
        }
        if let Some(location) = &data.location {
            if location.trim().is_empty() {
                return Err(AppError::validation("Location cannot be empty"));
            }
        }
        if let Some(quantity) = data.quantity {
            if quantity < 0 {
                return Err(AppError::validation("Quantity must be non-negative"));
            }
        }

        let listing = self.listing_repo.update(id, &data).await?;
        info!(listing_id = id, "Listing updated");
        Ok(listing)
    }

    /// Deletes a listing permanently.
    pub async fn delete_listing(&self, id: i64) -> AppResult<()> {
        let deleted = self.listing_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Listing {id} not found")));
        }
        info!(listing_id = id, "Listing deleted");
        Ok(())
    }
}
