//! Utility functions used across the application:
//!
//! - [`code_generator`] - Short code generation and format validation
//! - [`url_normalizer`] - URL canonicalization
//! - [`db_error`] - SQLx error classification

pub mod code_generator;
pub mod db_error;
pub mod url_normalizer;
