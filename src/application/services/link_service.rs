//! Idempotent URL shortening.

use metrics::counter;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use super::run_to_completion;
use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StoreError, UniqueKey, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;
use serde_json::json;

/// Default number of generated codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Single-segment paths served by fixed routes; a link under one would never
/// redirect.
pub const RESERVED_CODES: &[&str] = &["health"];

/// Result of [`LinkService::shorten`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub record: UrlRecord,
    /// `false` when the long URL had already been shortened.
    pub is_new: bool,
}

impl ShortenOutcome {
    fn created(record: UrlRecord) -> Self {
        Self {
            record,
            is_new: true,
        }
    }

    fn existing(record: UrlRecord) -> Self {
        Self {
            record,
            is_new: false,
        }
    }
}

/// Service that maps long URLs to short codes.
///
/// A long URL maps to at most one short code. Repeated or concurrent shortening of
/// the same URL returns the same code; the store's unique constraint on `long_url`
/// decides races, and the loser re-reads the winner's record.
pub struct LinkService<R: ?Sized, G> {
    repository: Arc<R>,
    generator: G,
    max_attempts: u32,
    base_url: String,
}

impl<R, G> LinkService<R, G>
where
    R: UrlRepository + ?Sized + 'static,
    G: CodeGenerator,
{
    /// Creates a new link service.
    ///
    /// `base_url` is the public origin short links are served from, e.g.
    /// `https://s.example.com`.
    pub fn new(
        repository: Arc<R>,
        generator: G,
        max_attempts: u32,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            generator,
            max_attempts,
            base_url: base_url.into(),
        }
    }

    /// Returns the short code for a canonical long URL, creating one if needed.
    ///
    /// The input must already be canonicalized (see
    /// [`crate::utils::url_normalizer::canonicalize_url`]).
    ///
    /// # Code Generation
    ///
    /// Up to `max_attempts` codes are generated. A code is skipped when it is
    /// one of [`RESERVED_CODES`], when it already exists, or when the insert loses
    /// a race on the `short_code` constraint.
    ///
    /// # Errors
    ///
    /// - [`AppError::CodeExhaustion`] if every attempt collided
    /// - [`AppError::StoreUnavailable`] / [`AppError::Internal`] on store failures;
    ///   no record is created in that case
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenOutcome, AppError> {
        if let Some(existing) = self.repository.find_by_long_url(long_url).await? {
            debug!(short_code = %existing.short_code, "URL was already shortened");
            return Ok(ShortenOutcome::existing(existing));
        }

        let mut attempts = 0;
        while attempts < self.max_attempts {
            attempts += 1;
            let code = self.generator.generate();

            if RESERVED_CODES.contains(&code.as_str()) {
                debug!(attempt = attempts, short_code = %code, "generated code is reserved");
                continue;
            }

            if self.repository.find_by_short_code(&code).await?.is_some() {
                counter!("shorten_code_collisions_total").increment(1);
                debug!(attempt = attempts, short_code = %code, "generated code already in use");
                continue;
            }

            let repository = Arc::clone(&self.repository);
            let new_record = NewUrlRecord::new(long_url, code);
            let inserted =
                run_to_completion(async move { repository.insert(new_record).await }).await;

            match inserted {
                Ok(record) => {
                    counter!("urls_shortened_total").increment(1);
                    info!(short_code = %record.short_code, attempts, "URL shortened");
                    return Ok(ShortenOutcome::created(record));
                }
                Err(StoreError::Duplicate(UniqueKey::LongUrl)) => {
                    debug!("lost insert race on long_url, returning existing record");
                    return self.fetch_race_winner(long_url).await;
                }
                Err(StoreError::Duplicate(UniqueKey::ShortCode)) => {
                    counter!("shorten_code_collisions_total").increment(1);
                    debug!(attempt = attempts, "lost insert race on short_code");
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        counter!("shorten_code_exhaustion_total").increment(1);
        error!(
            attempts = self.max_attempts,
            "short code generation exhausted; code space may be saturated"
        );
        Err(AppError::code_exhaustion(self.max_attempts))
    }

    /// Builds the public short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Re-reads the record that won a concurrent insert of the same long URL.
    async fn fetch_race_winner(&self, long_url: &str) -> Result<ShortenOutcome, AppError> {
        match self.repository.find_by_long_url(long_url).await? {
            Some(winner) => Ok(ShortenOutcome::existing(winner)),
            None => {
                warn!("long_url conflict reported but no record found");
                Err(AppError::internal(
                    "Failed to shorten URL",
                    json!({ "reason": "conflicting record not found" }),
                ))
            }
        }
    }
}
