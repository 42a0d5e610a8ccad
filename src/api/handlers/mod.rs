//! HTTP request handlers for API endpoints.

pub mod health;
pub mod thumbnail;

pub use health::health_handler;
pub use thumbnail::{missing_video_id_handler, thumbnail_handler};
