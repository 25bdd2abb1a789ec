//! Redis-backed redirect cache.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

const KEY_PREFIX: &str = "short:";

/// Redis cache storing `short:<code>` keys with a fixed TTL.
///
/// `ConnectionManager` reconnects transparently and is cheap to clone per call.
pub struct RedisCache {
    conn: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCache {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("invalid Redis URL: {e}")))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        let mut probe = conn.clone();
        probe
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("PING failed: {e}")))?;

        info!(ttl_seconds, "Connected to Redis");

        Ok(Self { conn, ttl_seconds })
    }

    fn key(short_code: &str) -> String {
        format!("{KEY_PREFIX}{short_code}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();
        let cached: Option<String> = conn
            .get(Self::key(short_code))
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))?;

        debug!(short_code, hit = cached.is_some(), "cache lookup");
        Ok(cached)
    }

    async fn set_url(&self, short_code: &str, long_url: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(Self::key(short_code), long_url, self.ttl_seconds)
            .await
            .map_err(|e| CacheError::Operation(e.to_string()))
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn name(&self) -> &'static str {
        "redis"
    }
}
