//! Administrative operations.

use std::path::Path;

use axum::Json;
use axum::extract::State;

use foodshare_database::seed::{self, SeedReport};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Wipes all tables and reloads the CSV seed data. `POST /api/admin/reseed`
pub async fn reseed(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<SeedReport>>, ApiError> {
    let dir = Path::new(&state.config.seed.directory);
    let report = seed::reseed(&state.db_pool, dir).await?;
    Ok(Json(ApiResponse::new(report)))
}
