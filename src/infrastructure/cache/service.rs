//! Cache trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by cache backends.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache connection error: {0}")]
    Connection(String),

    #[error("cache operation error: {0}")]
    Operation(String),
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Read-through cache of `short_code -> long_url` for redirects.
///
/// A mapping never changes once created, so entries never need invalidation;
/// they only expire by TTL. Callers treat every error as a miss.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL
/// - [`crate::infrastructure::cache::NullCache`] - Always misses
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached long URL for a short code, `None` on miss.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Caches a mapping with the backend's default TTL.
    async fn set_url(&self, short_code: &str, long_url: &str) -> CacheResult<()>;

    /// Checks that the backend is reachable.
    async fn health_check(&self) -> bool;

    /// Backend name reported by the health endpoint.
    fn name(&self) -> &'static str;
}
