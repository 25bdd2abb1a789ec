//! No-op cache used when Redis is not configured or unreachable.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;

/// A cache that never stores anything; every lookup is a miss.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCache;

impl NullCache {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _short_code: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(&self, _short_code: &str, _long_url: &str) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_null_cache_always_misses() {
        let cache = NullCache::new();
        cache.set_url("abc123", "https://example.com/").await.unwrap();

        assert!(cache.get_url("abc123").await.unwrap().is_none());
        assert!(cache.health_check().await);
    }
}
