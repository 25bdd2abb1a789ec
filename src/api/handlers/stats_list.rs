//! Handler for the paginated stats listing.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde_json::json;

use crate::api::dto::pagination::PaginationParams;
use crate::api::dto::stats_list::StatsListResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all links, newest first, with totals across the whole store.
///
/// # Endpoint
///
/// `GET /api/url/stats`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1, values below 1 become 1)
/// - `limit` (optional): Items per page (default: 50, clamped to 1..=100)
///
/// Only the leading integer of each value is read; a value without one, or `0`,
/// takes the default.
///
/// # Response
///
/// ```json
/// {
///   "data": [{ "id": 1, "longUrl": "...", "shortCode": "a1b2c3", "clicks": 4, "createdAt": "..." }],
///   "pagination": { "page": 1, "limit": 50, "total": 1, "pages": 1, "hasNext": false, "hasPrev": false },
///   "summary": { "totalUrls": 1, "totalClicks": 4, "averageClicks": 4.0 }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 only if the query string itself cannot be decoded.
pub async fn stats_list_handler(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<StatsListResponse>, AppError> {
    let Query(params) = params.map_err(|e| {
        AppError::bad_request(
            "Invalid pagination parameters",
            json!({ "reason": e.body_text() }),
        )
    })?;

    let (page, limit) = params.page_and_limit();
    let stats = state.redirect_service.list_stats(page, limit).await?;

    Ok(Json(stats.into()))
}
