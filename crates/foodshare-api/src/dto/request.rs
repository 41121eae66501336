//! Request DTOs with validation rules.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use foodshare_entity::claim::ClaimStatus;
use foodshare_entity::listing::{CreateListing, FoodType, MealType, UpdateListing};
use foodshare_entity::provider::{CreateProvider, UpdateProvider};

/// Request body for creating a listing.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateListingRequest {
    /// Food item name.
    #[validate(length(min = 1, max = 200, message = "Food name must be 1-200 characters"))]
    pub food_name: String,
    /// Quantity in portions.
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: i64,
    /// Expiry date (YYYY-MM-DD).
    pub expiry_date: NaiveDate,
    /// Owning provider ID.
    pub provider_id: i64,
    /// Pickup city.
    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: String,
    /// Dietary category.
    pub food_type: FoodType,
    /// Meal category.
    pub meal_type: MealType,
}

impl From<CreateListingRequest> for CreateListing {
    fn from(req: CreateListingRequest) -> Self {
        Self {
            food_name: req.food_name,
            quantity: req.quantity,
            expiry_date: req.expiry_date,
            provider_id: req.provider_id,
            location: req.location,
            food_type: req.food_type,
            meal_type: req.meal_type,
        }
    }
}

/// Request body for partially updating a listing. Absent fields keep
/// their current values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateListingRequest {
    /// New food item name.
    #[validate(length(min = 1, max = 200, message = "Food name must be 1-200 characters"))]
    pub food_name: Option<String>,
    /// New quantity.
    #[validate(range(min = 0, message = "Quantity cannot be negative"))]
    pub quantity: Option<i64>,
    /// New expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// New pickup city.
    #[validate(length(min = 1, max = 200, message = "Location must be 1-200 characters"))]
    pub location: Option<String>,
    /// New dietary category.
    pub food_type: Option<FoodType>,
    /// New meal category.
    pub meal_type: Option<MealType>,
}

impl From<UpdateListingRequest> for UpdateListing {
    fn from(req: UpdateListingRequest) -> Self {
        Self {
            food_name: req.food_name,
            quantity: req.quantity,
            expiry_date: req.expiry_date,
            location: req.location,
            food_type: req.food_type,
            meal_type: req.meal_type,
        }
    }
}

/// Request body for creating a provider.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProviderRequest {
    /// Organization name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    /// Provider category, e.g. "Restaurant".
    #[validate(length(min = 1, max = 100, message = "Kind must be 1-100 characters"))]
    pub kind: String,
    /// Street address.
    pub address: String,
    /// City.
    #[validate(length(min = 1, max = 200, message = "City must be 1-200 characters"))]
    pub city: String,
    /// Contact details.
    pub contact: String,
}

impl From<CreateProviderRequest> for CreateProvider {
    fn from(req: CreateProviderRequest) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            address: req.address,
            city: req.city,
            contact: req.contact,
        }
    }
}

/// Request body for partially updating a provider.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProviderRequest {
    /// New organization name.
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    /// New provider category.
    #[validate(length(min = 1, max = 100, message = "Kind must be 1-100 characters"))]
    pub kind: Option<String>,
    /// New street address.
    pub address: Option<String>,
    /// New city.
    #[validate(length(min = 1, max = 200, message = "City must be 1-200 characters"))]
    pub city: Option<String>,
    /// New contact details.
    pub contact: Option<String>,
}

impl From<UpdateProviderRequest> for UpdateProvider {
    fn from(req: UpdateProviderRequest) -> Self {
        Self {
            name: req.name,
            kind: req.kind,
            address: req.address,
            city: req.city,
            contact: req.contact,
        }
    }
}

/// Request body for the ad-hoc SQL console.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryRequest {
    /// SQL text. Only SELECT statements are accepted.
    pub sql: String,
}

/// Query-string parameters for the provider contact lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactQuery {
    /// City to look up contacts for.
    pub city: String,
}

/// Query-string parameters for the claim list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimQuery {
    /// Optional status filter.
    pub status: Option<ClaimStatus>,
}
