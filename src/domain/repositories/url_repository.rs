//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use async_trait::async_trait;
use thiserror::Error;

/// The two unique keys of a [`UrlRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    LongUrl,
    ShortCode,
}

impl UniqueKey {
    /// Column name backing the key.
    pub fn column(self) -> &'static str {
        match self {
            UniqueKey::LongUrl => "long_url",
            UniqueKey::ShortCode => "short_code",
        }
    }
}

/// Storage failures, classified so callers can react to unique-key races.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert violated the unique constraint on the given key.
    #[error("duplicate {}", .0.column())]
    Duplicate(UniqueKey),

    /// Transient infrastructure failure (pool timeout, connection lost, ...).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store error: {0}")]
    Other(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Repository interface for URL records.
///
/// Implementations must enforce uniqueness of `long_url` and `short_code` at the
/// storage level and increment clicks with a single atomic operation. Every method
/// is one short, independent store call.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Finds a record by its canonical long URL.
    async fn find_by_long_url(&self, long_url: &str) -> StoreResult<Option<UrlRecord>>;

    /// Finds a record by its short code.
    async fn find_by_short_code(&self, short_code: &str) -> StoreResult<Option<UrlRecord>>;

    /// Inserts a new record with `clicks = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Duplicate`] naming the violated key if either the long
    /// URL or the short code already exists. Nothing is written in that case.
    async fn insert(&self, new_record: NewUrlRecord) -> StoreResult<UrlRecord>;

    /// Atomically adds one to `clicks`.
    ///
    /// Returns `Ok(false)` if no record has this code.
    async fn increment_clicks(&self, short_code: &str) -> StoreResult<bool>;

    /// Lists records ordered by `created_at` descending (newest first).
    async fn list_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<UrlRecord>>;

    /// Counts all records.
    async fn count(&self) -> StoreResult<i64>;

    /// Sums `clicks` over all records; `0` for an empty store.
    async fn sum_clicks(&self) -> StoreResult<i64>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> StoreResult<()>;
}
