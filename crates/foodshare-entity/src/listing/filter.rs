//! Listing search filters.

use serde::{Deserialize, Serialize};

use super::types::{FoodType, MealType};

/// Filter selections for browsing listings. Absent fields mean "all".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingFilter {
    /// Restrict to listings in this city.
    pub location: Option<String>,
    /// Restrict to this dietary category.
    pub food_type: Option<FoodType>,
    /// Restrict to this meal category.
    pub meal_type: Option<MealType>,
}

impl ListingFilter {
    /// Whether no filters are set.
    pub fn is_empty(&self) -> bool {
        self.location.is_none() && self.food_type.is_none() && self.meal_type.is_none()
    }
}
