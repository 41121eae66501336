//! Food and meal type enumerations.
//!
//! Both enums are stored as TEXT in SQLite using the same spellings the
//! seed exports carry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use foodshare_core::AppError;

/// Dietary category of a food listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum FoodType {
    /// Vegetarian food.
    Vegetarian,
    /// Non-vegetarian food.
    #[sqlx(rename = "Non-Vegetarian")]
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    /// Vegan food.
    Vegan,
}

impl FoodType {
    /// All known food types, in display order.
    pub const ALL: [FoodType; 3] = [Self::Vegetarian, Self::NonVegetarian, Self::Vegan];

    /// Return the food type as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "Vegetarian",
            Self::NonVegetarian => "Non-Vegetarian",
            Self::Vegan => "Vegan",
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FoodType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Vegetarian" => Ok(Self::Vegetarian),
            "Non-Vegetarian" => Ok(Self::NonVegetarian),
            "Vegan" => Ok(Self::Vegan),
            _ => Err(AppError::validation(format!(
                "Invalid food type: '{s}'. Expected one of: Vegetarian, Non-Vegetarian, Vegan"
            ))),
        }
    }
}

/// Meal category of a food listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum MealType {
    /// Breakfast items.
    Breakfast,
    /// Lunch items.
    Lunch,
    /// Dinner items.
    Dinner,
    /// Snacks.
    Snacks,
}

impl MealType {
    /// All known meal types, in display order.
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    /// Return the meal type as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snacks => "Snacks",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MealType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Breakfast" => Ok(Self::Breakfast),
            "Lunch" => Ok(Self::Lunch),
            "Dinner" => Ok(Self::Dinner),
            "Snacks" => Ok(Self::Snacks),
            _ => Err(AppError::validation(format!(
                "Invalid meal type: '{s}'. Expected one of: Breakfast, Lunch, Dinner, Snacks"
            ))),
        }
    }
}
