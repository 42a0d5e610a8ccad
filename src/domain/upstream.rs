//! Contract for the upstream video metadata API.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::domain::entities::VideoId;

/// Failure to talk to the metadata API at all.
///
/// An HTTP error status is not an `UpstreamError`: the body still reaches the parser.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Fetches raw metadata for a video.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::VimeoClient`] - `reqwest`-backed client
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataClient: Send + Sync {
    /// The URL that [`Self::fetch_metadata`] requests for `video_id`.
    fn metadata_url(&self, video_id: &VideoId) -> String;

    /// Performs one GET for the video's metadata and returns the body as text.
    ///
    /// # Errors
    ///
    /// Returns [`UpstreamError`] on connection, DNS, TLS, or timeout failures.
    async fn fetch_metadata(&self, video_id: &VideoId) -> Result<String, UpstreamError>;
}
