//! Provider directory and administration handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use foodshare_core::error::AppError;
use foodshare_entity::provider::{Provider, ProviderContact};

use crate::dto::request::{ContactQuery, CreateProviderRequest, UpdateProviderRequest};
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Lists all providers. `GET /api/providers`
pub async fn list_providers(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Provider>>>, ApiError> {
    let providers = state.directory_service.list_providers().await?;
    Ok(Json(ApiResponse::new(providers)))
}

/// Provider contacts for one city. `GET /api/providers/contacts?city=...`
pub async fn provider_contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactQuery>,
) -> Result<Json<ApiResponse<Vec<ProviderContact>>>, ApiError> {
    let contacts = state.directory_service.provider_contacts(&query.city).await?;
    Ok(Json(ApiResponse::new(contacts)))
}

/// Gets one provider. `GET /api/providers/{id}`
pub async fn get_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Provider>>, ApiError> {
    let provider = state.directory_service.get_provider(id).await?;
    Ok(Json(ApiResponse::new(provider)))
}

/// Registers a provider. `POST /api/providers`
pub async fn create_provider(
    State(state): State<AppState>,
    Json(request): Json<CreateProviderRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Provider>>), ApiError> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let provider = state
        .directory_service
        .create_provider(request.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(provider))))
}

/// Partially updates a provider. `PUT /api/providers/{id}`
pub async fn update_provider(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateProviderRequest>,
) -> Result<Json<ApiResponse<Provider>>, ApiError> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let provider = state
        .directory_service
        .update_provider(id, request.into())
        .await?;
    Ok(Json(ApiResponse::new(provider)))
}
