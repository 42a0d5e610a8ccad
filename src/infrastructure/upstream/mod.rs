//! HTTP clients for third-party APIs.

mod vimeo_client;

pub use vimeo_client::{DEFAULT_VIMEO_API_URL, VimeoClient};
