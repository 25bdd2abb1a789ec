//! DTO for a single URL record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// A URL record as returned by the stats endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlRecordResponse {
    pub id: i64,
    pub long_url: String,
    pub short_code: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl From<UrlRecord> for UrlRecordResponse {
    fn from(r: UrlRecord) -> Self {
        Self {
            id: r.id,
            long_url: r.long_url,
            short_code: r.short_code,
            clicks: r.clicks,
            created_at: r.created_at,
        }
    }
}
