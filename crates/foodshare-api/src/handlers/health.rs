//! Health and readiness probes.

use axum::Json;
use axum::extract::State;

use crate::dto::response::{HealthResponse, ReadinessResponse};
use crate::state::AppState;

/// Liveness probe. `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe with a database round-trip. `GET /health/ready`
pub async fn readiness(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let database = match sqlx::query("SELECT 1").execute(&state.db_pool).await {
        Ok(_) => "ok",
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            "unavailable"
        }
    };

    Json(ReadinessResponse {
        status: if database == "ok" { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
    })
}
