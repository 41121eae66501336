//! Receiver directory handlers.

use axum::Json;
use axum::extract::{Path, State};

use foodshare_entity::receiver::Receiver;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Lists all receivers. `GET /api/receivers`
pub async fn list_receivers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Receiver>>>, ApiError> {
    let receivers = state.directory_service.list_receivers().await?;
    Ok(Json(ApiResponse::new(receivers)))
}

/// Gets one receiver. `GET /api/receivers/{id}`
pub async fn get_receiver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Receiver>>, ApiError> {
    let receiver = state.directory_service.get_receiver(id).await?;
    Ok(Json(ApiResponse::new(receiver)))
}
