//! The search/filter panel: declarative filter-to-query translation.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use foodshare_core::result::AppResult;
use foodshare_database::repositories::listing::ListingRepository;
use foodshare_entity::listing::{FoodType, ListingFilter, ListingWithProvider, MealType};

/// Available values for the three filter selectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Cities that currently have listings.
    pub locations: Vec<String>,
    /// All dietary categories.
    pub food_types: Vec<String>,
    /// All meal categories.
    pub meal_types: Vec<String>,
}

/// Serves filtered listing views with embedded provider contact fields.
#[derive(Debug, Clone)]
pub struct BrowseService {
    /// Listing repository.
    listing_repo: Arc<ListingRepository>,
}

impl BrowseService {
    /// Creates a new browse service.
    pub fn new(listing_repo: Arc<ListingRepository>) -> Self {
        Self { listing_repo }
    }

    /// Searches listings with the given filters, ordered by ascending
    /// expiry date. A filter matching nothing yields an empty list.
    pub async fn search(&self, filter: &ListingFilter) -> AppResult<Vec<ListingWithProvider>> {
        self.listing_repo.search(filter).await
    }

    /// Returns the options for populating the filter selectors.
    ///
    /// Locations come from the data; food and meal types are the fixed
    /// enum domains.
    pub async fn filter_options(&self) -> AppResult<FilterOptions> {
        let locations = self.listing_repo.distinct_locations().await?;
        Ok(FilterOptions {
            locations,
            food_types: FoodType::ALL.iter().map(|t| t.to_string()).collect(),
            meal_types: MealType::ALL.iter().map(|t| t.to_string()).collect(),
        })
    }
}
