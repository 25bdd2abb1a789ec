//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted long URL to short code mapping
//! - [`NewUrlRecord`] - Input for inserting a new mapping

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
