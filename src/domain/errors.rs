//! Error taxonomy for thumbnail resolution.

use thiserror::Error;

use crate::domain::entities::ThumbnailSize;
use crate::domain::upstream::UpstreamError;

/// Terminal failure of a single resolution.
///
/// None of these are retried internally. Cache failures never appear here:
/// they are logged and degraded to a miss or a skipped write.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Video id must be a number.")]
    InvalidVideoId,

    #[error("Unsupported thumbnail size '{0}', expected one of: large, medium, small")]
    UnsupportedSize(String),

    #[error("Could not get data from vimeo: {url}")]
    UpstreamTransport {
        url: String,
        #[source]
        source: UpstreamError,
    },

    #[error("Received invalid response from Vimeo api ({url}): {body}")]
    UpstreamData { url: String, body: String },

    #[error("Received invalid img url for size '{size}' from Vimeo api ({url})")]
    ThumbnailNotFound { url: String, size: ThumbnailSize },

    #[error("Thumbnail resolution task failed: {0}")]
    TaskFailed(String),
}
