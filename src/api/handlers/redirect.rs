//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL and counts the click.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Reject codes that are not exactly the configured length of `[0-9a-z]`
/// 2. Look up the long URL (cache first, then store)
/// 3. Atomically increment the click counter
/// 4. Return `301 Moved Permanently`
///
/// A failed click increment does not block the redirect.
///
/// # Errors
///
/// Returns 400 for a malformed code and 404 if the code doesn't exist.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = state.redirect_service.resolve(&code).await?;

    // `Redirect::permanent` answers 308; clients expect 301 here.
    Ok((StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, long_url)]))
}
