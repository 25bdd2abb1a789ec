//! Handler for the link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::url_normalizer::canonicalize_url;

/// Creates a short link for a long URL, or returns the existing one.
///
/// # Endpoint
///
/// `POST /api/url/shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "example.com/some/page" }
/// ```
///
/// The URL is trimmed, given an `https://` scheme when it has none, and
/// canonicalized before lookup, so equivalent spellings share one code.
///
/// # Response
///
/// `201 Created` for a new mapping, `200 OK` when the URL was already shortened:
///
/// ```json
/// {
///   "shortCode": "a1b2c3",
///   "longUrl": "https://example.com/some/page",
///   "shortUrl": "http://localhost:5000/a1b2c3",
///   "isNew": true,
///   "message": "URL shortened successfully"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body is malformed or the URL is missing, too long, or invalid
/// - 500 `code_exhaustion` if no free code was found
/// - 503 if the store is unavailable
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|e| {
        AppError::bad_request("Invalid request body", json!({ "reason": e.body_text() }))
    })?;
    payload.validate()?;

    let raw_url = payload.long_url.unwrap_or_default();
    let long_url = canonicalize_url(&raw_url).map_err(|e| {
        AppError::bad_request("Please provide a valid URL", json!({ "reason": e.to_string() }))
    })?;

    let outcome = state.link_service.shorten(&long_url).await?;

    let status = if outcome.is_new {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let short_url = state.link_service.short_url(&outcome.record.short_code);

    Ok((status, Json(ShortenResponse::new(outcome, short_url))))
}
