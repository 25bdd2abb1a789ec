//! URL record entity, the only persisted entity of the service.

use chrono::{DateTime, Utc};

/// A long URL mapped to its short code, with a click counter.
///
/// Both `long_url` and `short_code` are globally unique. A record is created once,
/// on the first successful shortening of its `long_url`, and afterwards only
/// `clicks` changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        long_url: String,
        short_code: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            long_url,
            short_code,
            clicks,
            created_at,
        }
    }
}

/// Input data for inserting a new record. Clicks always start at zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub long_url: String,
    pub short_code: String,
}

impl NewUrlRecord {
    pub fn new(long_url: impl Into<String>, short_code: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            short_code: short_code.into(),
        }
    }
}
