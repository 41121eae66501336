//! Listing browse and CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use foodshare_core::error::AppError;
use foodshare_entity::listing::{Listing, ListingFilter, ListingWithProvider};
use foodshare_service::browse::FilterOptions;

use crate::dto::request::{CreateListingRequest, UpdateListingRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Searches listings with optional filters. `GET /api/listings`
///
/// Results carry the owning provider's name and contact and are
/// ordered by ascending expiry date.
pub async fn search_listings(
    State(state): State<AppState>,
    Query(filter): Query<ListingFilter>,
) -> Result<Json<ApiResponse<Vec<ListingWithProvider>>>, ApiError> {
    let listings = state.browse_service.search(&filter).await?;
    Ok(Json(ApiResponse::new(listings)))
}

/// Returns the values available for each filter selector.
/// `GET /api/listings/filters`
pub async fn filter_options(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FilterOptions>>, ApiError> {
    let options = state.browse_service.filter_options().await?;
    Ok(Json(ApiResponse::new(options)))
}

/// Gets one listing. `GET /api/listings/{id}`
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<Listing>>, ApiError> {
    let listing = state.listing_service.get_listing(id).await?;
    Ok(Json(ApiResponse::new(listing)))
}

/// Creates a listing. `POST /api/listings`
pub async fn create_listing(
    State(state): State<AppState>,
    Json(request): Json<CreateListingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Listing>>), ApiError> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let listing = state.listing_service.create_listing(request.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(listing))))
}

/// Partially updates a listing. `PUT /api/listings/{id}`
pub async fn update_listing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateListingRequest>,
) -> Result<Json<ApiResponse<Listing>>, ApiError> {
    request
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let listing = state
        .listing_service
        .update_listing(id, request.into())
        .await?;
    Ok(Json(ApiResponse::new(listing)))
}

/// Deletes a listing and its claims. `DELETE /api/listings/{id}`
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.listing_service.delete_listing(id).await?;
    Ok(Json(MessageResponse::new(format!("Listing {id} deleted"))))
}
