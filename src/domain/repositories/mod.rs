//! Repository trait definitions for the domain layer.
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing

pub mod url_repository;

pub use url_repository::{StoreError, StoreResult, UniqueKey, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
