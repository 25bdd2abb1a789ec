//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`                - Short link redirect (301)
//! - `GET  /health`                - Health check: store and cache
//! - `POST /api/url/shorten`       - Create a short link
//! - `GET  /api/url/stats`         - Paginated statistics
//! - `GET  /api/url/stats/{code}`  - Statistics for one link
//! - anything else                 - JSON 404
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token buckets: a general limit on every route and a
//!   stricter one on shortening
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{fallback_handler, health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::config::RateLimitSettings;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_governor::key_extractor::{PeerIpKeyExtractor, SmartIpKeyExtractor};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Assembles the routes, with `shorten` supplying the shortening endpoint.
fn compose(state: AppState, shorten: Router<AppState>) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api/url", shorten.merge(api::routes::stats_routes()))
        .fallback(fallback_handler)
        .with_state(state)
}

fn normalize(router: Router) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router)
}

/// Constructs the application router without rate limiting or path
/// normalization.
///
/// Does not require connect info, so it can be driven directly by test clients.
pub fn router(state: AppState) -> Router {
    compose(state, api::routes::shorten_routes()).layer(tracing::layer())
}

/// Constructs the production router with rate limiting.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `limits` - request budgets per client IP
/// - `behind_proxy` - when `true`, the client IP is read from `X-Forwarded-For` /
///   `X-Real-IP` headers instead of the peer socket address; enable only when the
///   service runs behind a trusted reverse proxy
///
/// The server must be started with connect info
/// (`into_make_service_with_connect_info::<SocketAddr>`).
///
/// # Errors
///
/// Returns an error if a limit allows zero requests.
pub fn rate_limited_router(
    state: AppState,
    limits: &RateLimitSettings,
    behind_proxy: bool,
) -> Result<NormalizePath<Router>> {
    let window = Duration::from_secs(limits.window_seconds);

    let router = if behind_proxy {
        let shorten = api::routes::shorten_routes().layer(rate_limit::layer(
            SmartIpKeyExtractor,
            window,
            limits.shorten_max_requests,
        )?);
        compose(state, shorten).layer(rate_limit::layer(
            SmartIpKeyExtractor,
            window,
            limits.max_requests,
        )?)
    } else {
        let shorten = api::routes::shorten_routes().layer(rate_limit::layer(
            PeerIpKeyExtractor,
            window,
            limits.shorten_max_requests,
        )?);
        compose(state, shorten).layer(rate_limit::layer(
            PeerIpKeyExtractor,
            window,
            limits.max_requests,
        )?)
    };

    Ok(normalize(router.layer(tracing::layer())))
}
