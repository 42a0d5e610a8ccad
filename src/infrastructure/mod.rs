//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces used by the application layer, providing
//! concrete implementations for caching and upstream HTTP access.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (Redis, in-memory and no-op implementations)
//! - [`upstream`] - Vimeo metadata API client

pub mod cache;
pub mod upstream;
