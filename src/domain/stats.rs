//! Value types returned by the statistics listing.

use crate::domain::entities::UrlRecord;

/// Largest page size accepted by the stats listing.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Page size used when the caller does not specify one.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Pagination metadata for one page of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Clamps `page` to `>= 1` and `limit` to `[1, MAX_PAGE_LIMIT]`.
    pub fn clamp(page: i64, limit: i64) -> (i64, i64) {
        (page.max(1), limit.clamp(1, MAX_PAGE_LIMIT))
    }

    /// Row offset of the first record on `page`.
    pub fn offset(page: i64, limit: i64) -> i64 {
        (page - 1).saturating_mul(limit)
    }

    /// Builds metadata for an already clamped `page`/`limit`.
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };

        Self {
            page,
            limit,
            total,
            pages,
            has_next: page.saturating_mul(limit) < total,
            has_prev: page > 1,
        }
    }
}

/// Aggregates across all records, independent of the requested page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSummary {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub average_clicks: f64,
}

impl StatsSummary {
    /// Average is `0.0` when there are no records.
    pub fn new(total_urls: i64, total_clicks: i64) -> Self {
        let average_clicks = if total_urls > 0 {
            total_clicks as f64 / total_urls as f64
        } else {
            0.0
        };

        Self {
            total_urls,
            total_clicks,
            average_clicks,
        }
    }
}

/// One page of records plus pagination and summary.
#[derive(Debug, Clone)]
pub struct StatsPage {
    pub records: Vec<UrlRecord>,
    pub pagination: Pagination,
    pub summary: StatsSummary,
}
