//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`stats`] - Pagination and summary value types for statistics
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Uniqueness of long URLs and short codes is enforced by the store behind
//! [`repositories::UrlRepository`], not by application-level checks.

pub mod entities;
pub mod repositories;
pub mod stats;
