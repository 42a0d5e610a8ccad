//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain rules and infrastructure collaborators.
//! Services consume traits ([`crate::infrastructure::cache::CacheService`],
//! [`crate::domain::upstream::MetadataClient`]) and provide a clean API for HTTP
//! handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::thumbnail_service::ThumbnailService`] - Cache-augmented thumbnail resolution

pub mod services;
