//! Video identifier entity.

use std::fmt;
use std::str::FromStr;

use crate::domain::errors::ResolveError;

/// A Vimeo video identifier.
///
/// Always a non-empty string of ASCII decimal digits. The value is kept verbatim
/// (no leading-zero stripping) because it is used as-is in cache keys and upstream URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Validates a raw path segment as a video id.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidVideoId`] if the input is empty or contains
    /// anything other than `0-9`.
    pub fn parse(raw: &str) -> Result<Self, ResolveError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ResolveError::InvalidVideoId);
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for VideoId {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_digits() {
        let id = VideoId::parse("12345").unwrap();
        assert_eq!(id.as_str(), "12345");
    }

    #[test]
    fn test_parse_keeps_leading_zeros() {
        let id = VideoId::parse("000123").unwrap();
        assert_eq!(id.as_str(), "000123");
        assert_eq!(id.to_string(), "000123");
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        for raw in ["abc", "12a", "a12", "1 2", "12/34", "-1", "1.5", "١٢٣", "12\n"] {
            assert!(
                matches!(VideoId::parse(raw), Err(ResolveError::InvalidVideoId)),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(VideoId::parse("").is_err());
    }

    #[test]
    fn test_from_str() {
        let id: VideoId = "42".parse().unwrap();
        assert_eq!(id, VideoId::parse("42").unwrap());
    }
}
