//! Domain layer: entities, resolution rules, and upstream contracts.
//!
//! # Modules
//!
//! - [`entities`] - Video ids, thumbnail sizes, request options, metadata records
//! - [`cache_policy`] - Cache key layout and TTL
//! - [`thumbnail_selector`] - Size fallback chain
//! - [`upstream`] - Metadata API trait
//! - [`errors`] - Resolution error taxonomy

pub mod cache_policy;
pub mod entities;
pub mod errors;
pub mod thumbnail_selector;
pub mod upstream;
