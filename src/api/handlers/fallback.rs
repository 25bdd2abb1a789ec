//! Handler for unmatched routes.

use axum::http::Uri;
use serde_json::json;

use crate::error::AppError;

/// Returns a JSON 404 naming the requested path and query.
pub async fn fallback_handler(uri: Uri) -> AppError {
    let path = uri
        .path_and_query()
        .map_or_else(|| uri.path(), |p| p.as_str());

    AppError::not_found(
        "The requested resource was not found",
        json!({ "path": path }),
    )
}
