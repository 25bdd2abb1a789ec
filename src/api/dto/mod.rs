//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names, and
//! validator for request validation.

pub mod health;
pub mod pagination;
pub mod shorten;
pub mod stats;
pub mod stats_list;
