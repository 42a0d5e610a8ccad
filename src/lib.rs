//! # Vimeo Thumbnail
//!
//! A small redirect service built with Axum: `GET /v/<id>` answers with a
//! 301 to the thumbnail image of a Vimeo video, resolved through the Vimeo
//! metadata API and cached per `(id, size)` for about a month.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Video ids, sizes, metadata parsing, fallback chain, cache policy
//! - **Application Layer** ([`application`]) - Cache-augmented resolution
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis / in-memory cache, Vimeo HTTP client
//! - **API Layer** ([`api`]) - Handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML usage page
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//! curl -I "http://localhost:3000/v/76979871?s=medium"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ThumbnailService;
    pub use crate::domain::cache_policy::CachePolicy;
    pub use crate::domain::entities::{MetadataRecord, RequestOptions, ThumbnailSize, VideoId};
    pub use crate::domain::errors::ResolveError;
    pub use crate::domain::upstream::{MetadataClient, UpstreamError};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::CacheService;
    pub use crate::state::AppState;
}
