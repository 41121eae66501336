//! Claim history handlers. Claims are read-only over the API.

use axum::Json;
use axum::extract::{Path, Query, State};

use foodshare_entity::claim::Claim;

use crate::dto::request::ClaimQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Lists claims, newest first. `GET /api/claims?status=...`
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<ClaimQuery>,
) -> Result<Json<ApiResponse<Vec<Claim>>>, ApiError> {
    let claims = state.directory_service.list_claims(query.status).await?;
    Ok(Json(ApiResponse::new(claims)))
}

/// Gets one claim. `GET /api/claims/{id}`
pub async fn get_claim(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Claim>>, ApiError> {
    let claim = state.directory_service.get_claim(id).await?;
    Ok(Json(ApiResponse::new(claim)))
}
