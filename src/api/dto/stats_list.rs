//! DTOs for the paginated stats listing.

use serde::Serialize;

use super::stats::UrlRecordResponse;
use crate::domain::stats::{Pagination, StatsPage, StatsSummary};

#[derive(Debug, Serialize)]
pub struct StatsListResponse {
    pub data: Vec<UrlRecordResponse>,
    pub pagination: PaginationMeta,
    pub summary: SummaryMeta,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMeta {
    pub total_urls: i64,
    pub total_clicks: i64,
    pub average_clicks: f64,
}

impl From<Pagination> for PaginationMeta {
    fn from(p: Pagination) -> Self {
        Self {
            page: p.page,
            limit: p.limit,
            total: p.total,
            pages: p.pages,
            has_next: p.has_next,
            has_prev: p.has_prev,
        }
    }
}

impl From<StatsSummary> for SummaryMeta {
    fn from(s: StatsSummary) -> Self {
        Self {
            total_urls: s.total_urls,
            total_clicks: s.total_clicks,
            average_clicks: s.average_clicks,
        }
    }
}

impl From<StatsPage> for StatsListResponse {
    fn from(page: StatsPage) -> Self {
        Self {
            data: page.records.into_iter().map(Into::into).collect(),
            pagination: page.pagination.into(),
            summary: page.summary.into(),
        }
    }
}
