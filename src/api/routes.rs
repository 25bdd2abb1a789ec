//! API route configuration, nested under `/api/url`.

use crate::api::handlers::{shorten_handler, stats_handler, stats_list_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Link creation routes.
///
/// Kept separate from [`stats_routes`] so a stricter rate limit can be layered
/// on them alone.
///
/// - `POST /shorten` - Shorten a URL (idempotent per long URL)
pub fn shorten_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}

/// Read-only statistics routes.
///
/// - `GET /stats`        - All links, paginated, with summary totals
/// - `GET /stats/{code}` - A single link's record
pub fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(stats_list_handler))
        .route("/stats/{code}", get(stats_handler))
}
