//! Domain entities for FoodShare: providers, receivers, food listings,
//! and claims, together with their supporting enums and filter types.

pub mod claim;
pub mod listing;
pub mod provider;
pub mod receiver;
