//! FoodShare Server — Food Donation Data Management Platform
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use foodshare_api::router::build_router;
use foodshare_api::state::AppState;
use foodshare_core::config::AppConfig;
use foodshare_core::error::AppError;
use foodshare_database::connection::DatabasePool;
use foodshare_database::migration::run_migrations;
use foodshare_database::repositories::claim::ClaimRepository;
use foodshare_database::repositories::listing::ListingRepository;
use foodshare_database::repositories::provider::ProviderRepository;
use foodshare_database::repositories::receiver::ReceiverRepository;
use foodshare_database::seed;
use foodshare_service::analytics::AnalyticsService;
use foodshare_service::browse::BrowseService;
use foodshare_service::console::ConsoleService;
use foodshare_service::directory::DirectoryService;
use foodshare_service::listing::ListingService;

#[tokio::main]
async fn main() {
    let env = std::env::var("FOODSHARE_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(environment = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting FoodShare v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    let pool = db.into_pool();

    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    if config.seed.on_startup {
        let seed_dir = std::path::Path::new(&config.seed.directory);
        match seed::seed_if_empty(&pool, seed_dir).await? {
            Some(report) => tracing::info!(
                providers = report.providers,
                receivers = report.receivers,
                listings = report.listings,
                claims = report.claims,
                "Seed data loaded"
            ),
            None => tracing::info!("Database already populated, skipping seed"),
        }
    }

    let provider_repo = Arc::new(ProviderRepository::new(pool.clone()));
    let receiver_repo = Arc::new(ReceiverRepository::new(pool.clone()));
    let listing_repo = Arc::new(ListingRepository::new(pool.clone()));
    let claim_repo = Arc::new(ClaimRepository::new(pool.clone()));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool: pool.clone(),
        listing_service: Arc::new(ListingService::new(
            listing_repo.clone(),
            provider_repo.clone(),
        )),
        browse_service: Arc::new(BrowseService::new(listing_repo)),
        analytics_service: Arc::new(AnalyticsService::new(pool.clone())),
        console_service: Arc::new(ConsoleService::new(pool)),
        directory_service: Arc::new(DirectoryService::new(
            provider_repo,
            receiver_repo,
            claim_repo,
        )),
    };

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {e}"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
