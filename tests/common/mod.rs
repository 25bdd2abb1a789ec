#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::config::ShortenerSettings;
use url_shortener::domain::entities::{NewUrlRecord, UrlRecord};
use url_shortener::domain::repositories::{StoreError, StoreResult, UrlRepository};
use url_shortener::infrastructure::cache::NullCache;
use url_shortener::infrastructure::persistence::MemoryUrlRepository;
use url_shortener::routes::router;
use url_shortener::state::AppState;

pub fn create_test_state() -> (AppState, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    let state = AppState::new(
        repo.clone(),
        Arc::new(NullCache::new()),
        &ShortenerSettings::default(),
    );
    (state, repo)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(router(state)).unwrap()
}

/// Inserts `count` records with codes `c00001`, `c00002`, ... in order.
pub async fn seed_records(repo: &MemoryUrlRepository, count: usize) -> Vec<UrlRecord> {
    let mut records = Vec::with_capacity(count);
    for i in 1..=count {
        let record = repo
            .insert(NewUrlRecord::new(
                format!("https://example.com/page/{i}"),
                format!("c{i:05}"),
            ))
            .await
            .unwrap();
        records.push(record);
    }
    records
}

/// A store that is always unreachable.
pub struct UnavailableRepository;

fn down<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("connection refused".to_string()))
}

#[async_trait]
impl UrlRepository for UnavailableRepository {
    async fn find_by_long_url(&self, _long_url: &str) -> StoreResult<Option<UrlRecord>> {
        down()
    }

    async fn find_by_short_code(&self, _short_code: &str) -> StoreResult<Option<UrlRecord>> {
        down()
    }

    async fn insert(&self, _new_record: NewUrlRecord) -> StoreResult<UrlRecord> {
        down()
    }

    async fn increment_clicks(&self, _short_code: &str) -> StoreResult<bool> {
        down()
    }

    async fn list_page(&self, _offset: i64, _limit: i64) -> StoreResult<Vec<UrlRecord>> {
        down()
    }

    async fn count(&self) -> StoreResult<i64> {
        down()
    }

    async fn sum_clicks(&self) -> StoreResult<i64> {
        down()
    }

    async fn ping(&self) -> StoreResult<()> {
        down()
    }
}

pub fn create_unavailable_state() -> AppState {
    AppState::new(
        Arc::new(UnavailableRepository),
        Arc::new(NullCache::new()),
        &ShortenerSettings::default(),
    )
}
