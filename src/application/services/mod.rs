//! Business logic services for the application layer.

pub mod thumbnail_service;

pub use thumbnail_service::ThumbnailService;
