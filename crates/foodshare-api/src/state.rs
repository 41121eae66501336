//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::SqlitePool;

use foodshare_core::config::AppConfig;
use foodshare_service::analytics::AnalyticsService;
use foodshare_service::browse::BrowseService;
use foodshare_service::console::ConsoleService;
use foodshare_service::directory::DirectoryService;
use foodshare_service::listing::ListingService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// SQLite connection pool.
    pub db_pool: SqlitePool,
    /// Listing CRUD service.
    pub listing_service: Arc<ListingService>,
    /// Search/filter service.
    pub browse_service: Arc<BrowseService>,
    /// Analytics catalog service.
    pub analytics_service: Arc<AnalyticsService>,
    /// Ad-hoc SQL console service.
    pub console_service: Arc<ConsoleService>,
    /// Provider/receiver/claim directory service.
    pub directory_service: Arc<DirectoryService>,
}
