//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StoreResult, UrlRepository};
use crate::utils::db_error::classify;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    long_url: String,
    short_code: String,
    clicks: i64,
    created_at: DateTime<Utc>,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.id, r.long_url, r.short_code, r.clicks, r.created_at)
    }
}

/// PostgreSQL repository for URL records.
///
/// Uniqueness comes from the `urls_long_url_key` and `urls_short_code_key`
/// constraints; click counting is a single `UPDATE ... SET clicks = clicks + 1`.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn find_by_long_url(&self, long_url: &str) -> StoreResult<Option<UrlRecord>> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, short_code, clicks, created_at
            FROM urls
            WHERE long_url = $1
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(classify)?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_short_code(&self, short_code: &str) -> StoreResult<Option<UrlRecord>> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, short_code, clicks, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(classify)?;

        Ok(row.map(UrlRecord::from))
    }

    async fn insert(&self, new_record: NewUrlRecord) -> StoreResult<UrlRecord> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (long_url, short_code)
            VALUES ($1, $2)
            RETURNING id, long_url, short_code, clicks, created_at
            "#,
        )
        .bind(&new_record.long_url)
        .bind(&new_record.short_code)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(classify)?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, short_code: &str) -> StoreResult<bool> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE short_code = $1")
            .bind(short_code)
            .execute(self.pool.as_ref())
            .await
            .map_err(classify)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<UrlRecord>> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, short_code, clicks, created_at
            FROM urls
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(classify)?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn count(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
    }

    async fn sum_clicks(&self) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(clicks), 0)::BIGINT FROM urls")
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(classify)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map_err(classify)?;

        Ok(())
    }
}
