//! Cache key layout and expiration policy for resolved thumbnails.

use chrono::{DateTime, Duration, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::entities::{ThumbnailSize, VideoId};

/// Default namespace for thumbnail keys.
pub const DEFAULT_KEY_PREFIX: &str = "vimeo-thumbnail:";

/// Default lifetime of a cached resolution (about one month).
pub const DEFAULT_TTL_SECONDS: u64 = 2_629_743;

static REDIRECTABLE_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("static regex is valid"));

/// How resolved URLs are keyed and how long they live.
#[derive(Debug, Clone)]
pub struct CachePolicy {
    key_prefix: String,
    ttl: Duration,
}

impl CachePolicy {
    /// TTLs too large for [`Duration`] are clamped to [`Duration::MAX`].
    pub fn new(key_prefix: impl Into<String>, ttl_seconds: u64) -> Self {
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            key_prefix: key_prefix.into(),
            ttl,
        }
    }

    /// Builds `<prefix><video_id>:<size>`.
    pub fn key(&self, video_id: &VideoId, size: ThumbnailSize) -> String {
        format!("{}{}:{}", self.key_prefix, video_id, size)
    }

    /// Absolute expiration for an entry written at `written_at`.
    ///
    /// Saturates at the latest representable instant.
    pub fn expires_at(&self, written_at: DateTime<Utc>) -> DateTime<Utc> {
        written_at
            .checked_add_signed(self.ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whether a cached value may be used as a redirect target.
    ///
    /// The cache is untyped, so anything not starting with `http://` or `https://`
    /// is rejected.
    pub fn is_redirectable(url: &str) -> bool {
        REDIRECTABLE_URL.is_match(url)
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self::new(DEFAULT_KEY_PREFIX, DEFAULT_TTL_SECONDS)
    }
}
