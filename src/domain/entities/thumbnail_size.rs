//! Thumbnail size tiers and per-request resolution options.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::ResolveError;

/// One of the three resolution tiers Vimeo publishes for a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThumbnailSize {
    #[default]
    Large,
    Medium,
    Small,
}

impl ThumbnailSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }

    /// The next smaller tier in the fallback chain `large -> medium -> small`.
    pub fn next_smaller(self) -> Option<Self> {
        match self {
            Self::Large => Some(Self::Medium),
            Self::Medium => Some(Self::Small),
            Self::Small => None,
        }
    }
}

impl FromStr for ThumbnailSize {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "large" => Ok(Self::Large),
            "medium" => Ok(Self::Medium),
            "small" => Ok(Self::Small),
            other => Err(ResolveError::UnsupportedSize(other.to_string())),
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options derived once from the query string of an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    pub size: ThumbnailSize,
    /// Descend to smaller tiers when the requested one is missing.
    pub size_fallback: bool,
    /// Consult the cache before asking upstream.
    pub use_cache: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            size: ThumbnailSize::Large,
            size_fallback: true,
            use_cache: true,
        }
    }
}
