//! Food listing entity.

pub mod filter;
pub mod model;
pub mod types;

pub use filter::ListingFilter;
pub use model::{CreateListing, Listing, ListingWithProvider, UpdateListing};
pub use types::{FoodType, MealType};
