//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for data persistence and caching.
//!
//! # Modules
//!
//! - [`cache`] - Redirect lookup cache (Redis and no-op implementations)
//! - [`persistence`] - URL repository implementations

pub mod cache;
pub mod persistence;
