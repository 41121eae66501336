//! Food listing entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::types::{FoodType, MealType};

/// A quantity of food offered by a provider, available for claim.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Listing {
    /// Unique listing identifier.
    pub id: i64,
    /// Name of the food item.
    pub food_name: String,
    /// Offered quantity (non-negative).
    pub quantity: i64,
    /// Date the food expires.
    pub expiry_date: NaiveDate,
    /// The provider offering the food.
    pub provider_id: i64,
    /// City where the food is available.
    pub location: String,
    /// Dietary category.
    pub food_type: FoodType,
    /// Meal category.
    pub meal_type: MealType,
}

/// A listing joined with its provider's name and contact, as rendered
/// by the search/filter panel.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ListingWithProvider {
    /// Unique listing identifier.
    pub id: i64,
    /// Name of the food item.
    pub food_name: String,
    /// Offered quantity.
    pub quantity: i64,
    /// Date the food expires.
    pub expiry_date: NaiveDate,
    /// The provider offering the food.
    pub provider_id: i64,
    /// City where the food is available.
    pub location: String,
    /// Dietary category.
    pub food_type: FoodType,
    /// Meal category.
    pub meal_type: MealType,
    /// Provider name.
    pub provider_name: String,
    /// Provider contact information.
    pub provider_contact: String,
}

/// Data required to create a new listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateListing {
    /// Name of the food item.
    pub food_name: String,
    /// Offered quantity (non-negative).
    pub quantity: i64,
    /// Date the food expires.
    pub expiry_date: NaiveDate,
    /// The owning provider.
    pub provider_id: i64,
    /// City where the food is available.
    pub location: String,
    /// Dietary category.
    pub food_type: FoodType,
    /// Meal category.
    pub meal_type: MealType,
}

/// Partial update of a listing. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateListing {
    /// New food name.
    pub food_name: Option<String>,
    /// New quantity.
    pub quantity: Option<i64>,
    /// New expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// New location.
    pub location: Option<String>,
    /// New dietary category.
    pub food_type: Option<FoodType>,
    /// New meal category.
    pub meal_type: Option<MealType>,
}

impl UpdateListing {
    /// Whether the update carries no changes at all.
    pub fn is_empty(&self) -> bool {
        self.food_name.is_none()
            && self.quantity.is_none()
            && self.expiry_date.is_none()
            && self.location.is_none()
            && self.food_type.is_none()
            && self.meal_type.is_none()
    }
}
