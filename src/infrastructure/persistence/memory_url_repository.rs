//! In-process implementation of the URL repository.
//!
//! Keeps both unique indexes behind one mutex so inserts are atomic with respect to
//! either key, matching the constraint behaviour of [`super::PgUrlRepository`].
//! Used with `STORAGE_BACKEND=memory` and by the integration tests.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{StoreError, StoreResult, UniqueKey, UrlRepository};

#[derive(Default)]
struct Tables {
    next_id: i64,
    /// Records in insertion order, indexed by `id - 1`.
    records: Vec<UrlRecord>,
    by_long_url: HashMap<String, usize>,
    by_short_code: HashMap<String, usize>,
}

/// Mutex-guarded in-memory store. Data is lost on restart.
#[derive(Default)]
pub struct MemoryUrlRepository {
    tables: Mutex<Tables>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn find_by_long_url(&self, long_url: &str) -> StoreResult<Option<UrlRecord>> {
        let tables = self.lock()?;
        Ok(tables
            .by_long_url
            .get(long_url)
            .map(|&idx| tables.records[idx].clone()))
    }

    async fn find_by_short_code(&self, short_code: &str) -> StoreResult<Option<UrlRecord>> {
        let tables = self.lock()?;
        Ok(tables
            .by_short_code
            .get(short_code)
            .map(|&idx| tables.records[idx].clone()))
    }

    async fn insert(&self, new_record: NewUrlRecord) -> StoreResult<UrlRecord> {
        let mut tables = self.lock()?;

        if tables.by_long_url.contains_key(&new_record.long_url) {
            return Err(StoreError::Duplicate(UniqueKey::LongUrl));
        }
        if tables.by_short_code.contains_key(&new_record.short_code) {
            return Err(StoreError::Duplicate(UniqueKey::ShortCode));
        }

        tables.next_id += 1;
        let record = UrlRecord::new(
            tables.next_id,
            new_record.long_url,
            new_record.short_code,
            0,
            Utc::now(),
        );

        let idx = tables.records.len();
        tables.by_long_url.insert(record.long_url.clone(), idx);
        tables.by_short_code.insert(record.short_code.clone(), idx);
        tables.records.push(record.clone());

        Ok(record)
    }

    async fn increment_clicks(&self, short_code: &str) -> StoreResult<bool> {
        let mut tables = self.lock()?;
        let Some(&idx) = tables.by_short_code.get(short_code) else {
            return Ok(false);
        };
        tables.records[idx].clicks += 1;
        Ok(true)
    }

    async fn list_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<UrlRecord>> {
        let tables = self.lock()?;
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        // Records are appended under the lock, so reverse insertion order is
        // newest first.
        Ok(tables
            .records
            .iter()
            .rev()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.lock()?.records.len() as i64)
    }

    async fn sum_clicks(&self) -> StoreResult<i64> {
        Ok(self.lock()?.records.iter().map(|r| r.clicks).sum())
    }

    async fn ping(&self) -> StoreResult<()> {
        self.lock().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = MemoryUrlRepository::new();
        let record = repo
            .insert(NewUrlRecord::new("https://example.com/", "abc123"))
            .await
            .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.clicks, 0);

        let by_url = repo.find_by_long_url("https://example.com/").await.unwrap();
        assert_eq!(by_url, Some(record.clone()));

        let by_code = repo.find_by_short_code("abc123").await.unwrap();
        assert_eq!(by_code, Some(record));
    }

    #[tokio::test]
    async fn test_insert_duplicate_long_url() {
        let repo = MemoryUrlRepository::new();
        repo.insert(NewUrlRecord::new("https://example.com/", "abc123"))
            .await
            .unwrap();

        let err = repo
            .insert(NewUrlRecord::new("https://example.com/", "xyz789"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Duplicate(UniqueKey::LongUrl)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_short_code() {
        let repo = MemoryUrlRepository::new();
        repo.insert(NewUrlRecord::new("https://example.com/", "abc123"))
            .await
            .unwrap();

        let err = repo
            .insert(NewUrlRecord::new("https://other.com/", "abc123"))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::Duplicate(UniqueKey::ShortCode)));
        assert!(
            repo.find_by_long_url("https://other.com/")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_increment_clicks() {
        let repo = MemoryUrlRepository::new();
        repo.insert(NewUrlRecord::new("https://example.com/", "abc123"))
            .await
            .unwrap();

        assert!(repo.increment_clicks("abc123").await.unwrap());
        assert!(repo.increment_clicks("abc123").await.unwrap());
        assert!(!repo.increment_clicks("zzzzzz").await.unwrap());

        let record = repo.find_by_short_code("abc123").await.unwrap().unwrap();
        assert_eq!(record.clicks, 2);
        assert_eq!(repo.sum_clicks().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_page_newest_first() {
        let repo = MemoryUrlRepository::new();
        for i in 0..5 {
            repo.insert(NewUrlRecord::new(
                format!("https://example.com/{i}"),
                format!("code0{i}"),
            ))
            .await
            .unwrap();
        }

        let page = repo.list_page(1, 2).await.unwrap();
        let codes: Vec<&str> = page.iter().map(|r| r.short_code.as_str()).collect();
        assert_eq!(codes, vec!["code03", "code02"]);
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = MemoryUrlRepository::new();
        assert_eq!(repo.count().await.unwrap(), 0);
        assert_eq!(repo.sum_clicks().await.unwrap(), 0);
        assert!(repo.list_page(0, 50).await.unwrap().is_empty());
        assert!(repo.ping().await.is_ok());
    }
}
