//! Ad-hoc SQL console handler.

use axum::Json;
use axum::extract::State;

use foodshare_database::table::QueryTable;

use crate::dto::request::QueryRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Runs a read-only SQL query. `POST /api/query`
///
/// Non-SELECT statements are rejected with a validation error; SQL
/// errors from the driver are surfaced to the caller.
pub async fn run_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<ApiResponse<QueryTable>>, ApiError> {
    let table = state.console_service.run(&request.sql).await?;
    Ok(Json(ApiResponse::new(table)))
}
