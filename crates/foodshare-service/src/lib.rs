//! Business logic services for FoodShare.
//!
//! Each service orchestrates one panel of the dashboard: listing
//! management, filtered browsing, the analytics catalog, the ad-hoc SQL
//! console, and the provider/receiver/claim directory.

pub mod analytics;
pub mod browse;
pub mod console;
pub mod directory;
pub mod listing;
