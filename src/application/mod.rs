//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules and expose a clean API
//! to HTTP handlers. They hold no mutable state of their own; all coordination is
//! delegated to the store's unique constraints and atomic updates.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Idempotent shortening with bounded code generation
//! - [`services::redirect_service::RedirectService`] - Redirect resolution, click counting and statistics

pub mod services;
