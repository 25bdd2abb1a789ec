//! Redirect resolution and per-link statistics.

use metrics::counter;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, warn};

use super::run_to_completion;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::domain::stats::{Pagination, StatsPage, StatsSummary};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::utils::code_generator::is_valid_code;

/// Resolves short codes and reports click statistics.
pub struct RedirectService<R: ?Sized> {
    repository: Arc<R>,
    cache: Arc<dyn CacheService>,
    code_length: usize,
}

impl<R> RedirectService<R>
where
    R: UrlRepository + ?Sized + 'static,
{
    pub fn new(repository: Arc<R>, cache: Arc<dyn CacheService>, code_length: usize) -> Self {
        Self {
            repository,
            cache,
            code_length,
        }
    }

    /// Resolves a short code to its long URL and records one click.
    ///
    /// Lookups go through the cache first. The click increment is a single atomic
    /// store update; if it fails the redirect is still served and the failure is
    /// logged and counted in `click_increment_failures_total`.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the code has the wrong length or alphabet
    /// - [`AppError::NotFound`] if no mapping exists
    /// - store errors from the lookup itself
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.check_format(code)?;

        let long_url = match self.cached(code).await {
            Some(url) => url,
            None => {
                let record = self.find(code).await?;
                self.populate_cache(code, &record.long_url);
                record.long_url
            }
        };

        let repository = Arc::clone(&self.repository);
        let owned_code = code.to_string();
        let incremented =
            run_to_completion(async move { repository.increment_clicks(&owned_code).await })
                .await;

        match incremented {
            Ok(true) => {}
            Ok(false) => {
                counter!("click_increment_failures_total").increment(1);
                warn!(short_code = code, "click increment matched no record");
            }
            Err(e) => {
                counter!("click_increment_failures_total").increment(1);
                warn!(short_code = code, error = %e, "click increment failed, redirecting anyway");
            }
        }

        counter!("redirects_total").increment(1);
        Ok(long_url)
    }

    /// Returns the record for a short code without counting a click.
    pub async fn get_stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.check_format(code)?;
        self.find(code).await
    }

    /// Returns one page of records, newest first, with aggregate totals.
    ///
    /// `page` is clamped to `>= 1` and `limit` to `[1, 100]`.
    pub async fn list_stats(&self, page: i64, limit: i64) -> Result<StatsPage, AppError> {
        let (page, limit) = Pagination::clamp(page, limit);
        let offset = Pagination::offset(page, limit);

        let (records, total, total_clicks) = tokio::try_join!(
            self.repository.list_page(offset, limit),
            self.repository.count(),
            self.repository.sum_clicks(),
        )?;

        Ok(StatsPage {
            records,
            pagination: Pagination::new(page, limit, total),
            summary: StatsSummary::new(total, total_clicks),
        })
    }

    /// Returns true if the store answers a trivial query.
    pub async fn store_healthy(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "store health check failed");
                false
            }
        }
    }

    fn check_format(&self, code: &str) -> Result<(), AppError> {
        if is_valid_code(code, self.code_length) {
            Ok(())
        } else {
            Err(AppError::invalid_code_format(code))
        }
    }

    async fn find(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    async fn cached(&self, code: &str) -> Option<String> {
        match self.cache.get_url(code).await {
            Ok(hit) => hit,
            Err(e) => {
                debug!(short_code = code, error = %e, "cache lookup failed, falling back to store");
                None
            }
        }
    }

    fn populate_cache(&self, code: &str, long_url: &str) {
        let cache = Arc::clone(&self.cache);
        let code = code.to_string();
        let long_url = long_url.to_string();

        tokio::spawn(async move {
            if let Err(e) = cache.set_url(&code, &long_url).await {
                debug!(short_code = %code, error = %e, "failed to populate cache");
            }
        });
    }
}
