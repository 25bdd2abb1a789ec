//! Per-client rate limiting using a token bucket.
//!
//! A limit of `max_requests` per `window` becomes a bucket of `max_requests`
//! tokens refilled at one token every `window / max_requests`. A client that
//! stays idle can burst the full window's allowance at once.

use anyhow::Result;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

/// Rate limiting layer keyed by `K`.
pub type RateLimitLayer<K> = GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Milliseconds between token refills for `max_requests` per `window`.
pub fn replenish_interval_ms(window: Duration, max_requests: u32) -> u64 {
    let window_ms = u64::try_from(window.as_millis()).unwrap_or(u64::MAX);
    (window_ms / u64::from(max_requests.max(1))).max(1)
}

/// Creates a limiter allowing `max_requests` per `window` for each key.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Use [`tower_governor::key_extractor::PeerIpKeyExtractor`] for direct
/// connections, or [`tower_governor::key_extractor::SmartIpKeyExtractor`] behind
/// a trusted reverse proxy (reads `X-Forwarded-For` / `X-Real-IP` / `Forwarded`).
///
/// # Errors
///
/// Returns an error if `max_requests` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let shorten = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(PeerIpKeyExtractor, Duration::from_secs(900), 20)?);
/// ```
pub fn layer<K: KeyExtractor>(
    key_extractor: K,
    window: Duration,
    max_requests: u32,
) -> Result<RateLimitLayer<K>> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms(window, max_requests))
        .burst_size(max_requests)
        .key_extractor(key_extractor)
        .finish()
        .ok_or_else(|| anyhow::anyhow!("rate limit must allow at least one request"))?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tower_governor::key_extractor::PeerIpKeyExtractor;

    #[test]
    fn test_replenish_interval() {
        // 100 requests per 15 minutes: one token every 9 seconds.
        assert_eq!(replenish_interval_ms(Duration::from_secs(900), 100), 9_000);
        assert_eq!(replenish_interval_ms(Duration::from_secs(900), 20), 45_000);
        assert_eq!(replenish_interval_ms(Duration::from_millis(1), 1000), 1);
    }

    #[test]
    fn test_zero_requests_rejected() {
        assert!(layer(PeerIpKeyExtractor, Duration::from_secs(60), 0).is_err());
        assert!(layer(PeerIpKeyExtractor, Duration::from_secs(60), 10).is_ok());
    }
}
