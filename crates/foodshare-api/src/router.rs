//! Route table and middleware stack.

use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::middleware as axum_middleware;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use foodshare_core::config::CorsConfig;

use crate::handlers::{admin, analytics, claim, console, health, listing, provider, receiver};
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Builds the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        // Browse and listing CRUD
        .route(
            "/listings",
            get(listing::search_listings).post(listing::create_listing),
        )
        .route("/listings/filters", get(listing::filter_options))
        .route(
            "/listings/{id}",
            get(listing::get_listing)
                .put(listing::update_listing)
                .delete(listing::delete_listing),
        )
        // Provider directory and administration
        .route(
            "/providers",
            get(provider::list_providers).post(provider::create_provider),
        )
        .route("/providers/contacts", get(provider::provider_contacts))
        .route(
            "/providers/{id}",
            get(provider::get_provider).put(provider::update_provider),
        )
        // Receiver directory
        .route("/receivers", get(receiver::list_receivers))
        .route("/receivers/{id}", get(receiver::get_receiver))
        // Claim history
        .route("/claims", get(claim::list_claims))
        .route("/claims/{id}", get(claim::get_claim))
        // Analytics catalog
        .route("/reports", get(analytics::list_reports))
        .route("/reports/{slug}", get(analytics::run_report))
        // Ad-hoc SQL console
        .route("/query", post(console::run_query))
        // Administration
        .route("/admin/reseed", post(admin::reseed));

    let body_limit = usize::try_from(state.config.server.max_body_bytes).unwrap_or(usize::MAX);
    let cors = cors_layer(&state.config.server.cors);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api)
        .layer(axum_middleware::from_fn(request_logging))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Builds the CORS layer from configuration.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    let layer = CorsLayer::new()
        .allow_methods(methods)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age_seconds));

    if config.allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        layer.allow_origin(origins)
    }
}
