//! Shared test fixtures and request helpers.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;

use foodshare_api::router::build_router;
use foodshare_api::state::AppState;
use foodshare_core::config::AppConfig;
use foodshare_database::connection::DatabasePool;
use foodshare_database::migration::run_migrations;
use foodshare_database::repositories::claim::ClaimRepository;
use foodshare_database::repositories::listing::ListingRepository;
use foodshare_database::repositories::provider::ProviderRepository;
use foodshare_database::repositories::receiver::ReceiverRepository;
use foodshare_service::analytics::AnalyticsService;
use foodshare_service::browse::BrowseService;
use foodshare_service::console::ConsoleService;
use foodshare_service::directory::DirectoryService;
use foodshare_service::listing::ListingService;

/// A router wired over an in-memory database with fixture data.
pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
}

/// Builds a test application with the standard fixture: two providers,
/// two receivers, three listings (total quantity 45), three claims.
pub async fn spawn_app() -> TestApp {
    let pool = DatabasePool::connect_in_memory()
        .await
        .expect("in-memory pool")
        .into_pool();
    run_migrations(&pool).await.expect("migrations");
    insert_fixture(&pool).await;

    let provider_repo = Arc::new(ProviderRepository::new(pool.clone()));
    let receiver_repo = Arc::new(ReceiverRepository::new(pool.clone()));
    let listing_repo = Arc::new(ListingRepository::new(pool.clone()));
    let claim_repo = Arc::new(ClaimRepository::new(pool.clone()));

    let state = AppState {
        config: Arc::new(AppConfig::default()),
        db_pool: pool.clone(),
        listing_service: Arc::new(ListingService::new(
            listing_repo.clone(),
            provider_repo.clone(),
        )),
        browse_service: Arc::new(BrowseService::new(listing_repo)),
        analytics_service: Arc::new(AnalyticsService::new(pool.clone())),
        console_service: Arc::new(ConsoleService::new(pool.clone())),
        directory_service: Arc::new(DirectoryService::new(
            provider_repo,
            receiver_repo,
            claim_repo,
        )),
    };

    TestApp {
        router: build_router(state),
        pool,
    }
}

async fn insert_fixture(pool: &SqlitePool) {
    sqlx::query(
        "INSERT INTO providers (id, name, kind, address, city, contact) VALUES \
         (1, 'Green Bistro', 'Restaurant', '12 Oak St', 'Chennai', 'g@example.com'), \
         (2, 'Daily Mart', 'Grocery Store', '3 Elm Ave', 'Mumbai', 'm@example.com')",
    )
    .execute(pool)
    .await
    .expect("providers fixture");
    sqlx::query(
        "INSERT INTO receivers (id, name, kind, city, contact) VALUES \
         (1, 'Hope Shelter', 'Shelter', 'Chennai', 'h@example.com'), \
         (2, 'Care NGO', 'NGO', 'Mumbai', 'c@example.com')",
    )
    .execute(pool)
    .await
    .expect("receivers fixture");
    sqlx::query(
        "INSERT INTO listings \
         (id, food_name, quantity, expiry_date, provider_id, location, food_type, meal_type) VALUES \
         (1, 'Rice', 25, '2026-01-15', 1, 'Chennai', 'Vegetarian', 'Lunch'), \
         (2, 'Chicken Curry', 10, '2026-01-10', 2, 'Mumbai', 'Non-Vegetarian', 'Dinner'), \
         (3, 'Samosa', 10, '2026-01-12', 1, 'Chennai', 'Vegetarian', 'Snacks')",
    )
    .execute(pool)
    .await
    .expect("listings fixture");
    sqlx::query(
        "INSERT INTO claims (id, listing_id, receiver_id, status, created_at) VALUES \
         (1, 1, 1, 'Completed', '2026-01-05 10:00:00'), \
         (2, 2, 2, 'Completed', '2026-01-06 11:00:00'), \
         (3, 3, 1, 'Pending', '2026-01-07 12:00:00')",
    )
    .execute(pool)
    .await
    .expect("claims fixture");
}

impl TestApp {
    /// Sends a GET request and parses the JSON response.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).expect("request");
        self.send(request).await
    }

    /// Sends a request with a JSON body and parses the JSON response.
    pub async fn send_json(
        &self,
        method: Method,
        uri: &str,
        body: Value,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request");
        self.send(request).await
    }

    /// Sends a bodyless request and parses the JSON response.
    pub async fn send_empty(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}
