//! Business logic services for the application layer.

pub mod link_service;
pub mod redirect_service;

pub use link_service::{LinkService, ShortenOutcome};
pub use redirect_service::RedirectService;

use crate::domain::repositories::{StoreError, StoreResult};
use std::future::Future;

/// Runs a store write on its own task and waits for it.
///
/// If the request future is dropped (client disconnect), the spawned write still
/// runs to completion instead of being abandoned mid-flight.
pub(crate) async fn run_to_completion<T, F>(write: F) -> StoreResult<T>
where
    F: Future<Output = StoreResult<T>> + Send + 'static,
    T: Send + 'static,
{
    tokio::spawn(write)
        .await
        .map_err(|e| StoreError::Other(format!("store task failed: {e}")))?
}
