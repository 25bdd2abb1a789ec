//! Handler for single-link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::UrlRecordResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the record for a short code, including its click count.
///
/// # Endpoint
///
/// `GET /api/url/stats/{code}`
///
/// Does not count as a click.
///
/// # Errors
///
/// Returns 400 for a malformed code and 404 if the code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<UrlRecordResponse>, AppError> {
    let record = state.redirect_service.get_stats(&code).await?;
    Ok(Json(record.into()))
}
