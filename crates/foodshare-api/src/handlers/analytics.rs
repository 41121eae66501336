//! Analytics catalog handlers.

use axum::Json;
use axum::extract::{Path, State};

use foodshare_service::analytics::{ReportResult, ReportSummary};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// Lists the analytics catalog. `GET /api/reports`
pub async fn list_reports(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<ReportSummary>>> {
    Json(ApiResponse::new(state.analytics_service.reports()))
}

/// Runs one catalog report. `GET /api/reports/{slug}`
pub async fn run_report(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<ReportResult>>, ApiError> {
    let result = state.analytics_service.run(&slug).await?;
    Ok(Json(ApiResponse::new(result)))
}
