//! Vimeo video metadata and the parser for the upstream payload.

use serde::Deserialize;
use serde_json::Value;
use serde_with::{DefaultOnError, serde_as};
use tracing::debug;

use super::thumbnail_size::ThumbnailSize;

/// The subset of a Vimeo `video/<id>.json` entry this service cares about.
///
/// Fields holding anything other than a string are treated as absent.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MetadataRecord {
    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub thumbnail_large: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub thumbnail_medium: Option<String>,

    #[serde_as(deserialize_as = "DefaultOnError")]
    #[serde(default)]
    pub thumbnail_small: Option<String>,
}

impl MetadataRecord {
    /// Parses a raw upstream response body.
    ///
    /// The payload is expected to be a JSON array; only its first element is used.
    /// Returns `None` ("no data") when:
    /// - the body is not valid JSON, or not an array
    /// - the array is empty
    /// - the first element is `null`, `false`, `0`, `""` or `{}`
    ///
    /// Any other first element is the record. Only an object can carry
    /// `thumbnail_*` keys, so arrays, strings, numbers and `true` yield a
    /// record with no thumbnails.
    ///
    /// Never panics or propagates a parse error.
    pub fn parse(body: &str) -> Option<Self> {
        let entries = match serde_json::from_str::<Value>(body) {
            Ok(Value::Array(entries)) => entries,
            Ok(_) => {
                debug!("Metadata payload is not an array");
                return None;
            }
            Err(e) => {
                debug!("Invalid json response: {}", e);
                return None;
            }
        };

        let Some(first) = entries.into_iter().next() else {
            debug!("Empty array found");
            return None;
        };

        if is_empty_value(&first) {
            debug!("First metadata entry is empty");
            return None;
        }

        // Derived `Deserialize` also accepts a sequence, filling fields by position.
        if !first.is_object() {
            debug!("First metadata entry is not an object");
            return Some(Self::default());
        }

        match serde_json::from_value::<Self>(first) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("First metadata entry could not be read: {}", e);
                Some(Self::default())
            }
        }
    }

    /// Returns the URL stored for `size`, treating an empty string as absent.
    pub fn thumbnail(&self, size: ThumbnailSize) -> Option<&str> {
        let value = match size {
            ThumbnailSize::Large => &self.thumbnail_large,
            ThumbnailSize::Medium => &self.thumbnail_medium,
            ThumbnailSize::Small => &self.thumbnail_small,
        };

        value.as_deref().filter(|url| !url.is_empty())
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Array(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_entry() {
        let record = MetadataRecord::parse(r#"[{"thumbnail_large":"http://x/y.jpg"}]"#).unwrap();
        assert_eq!(record.thumbnail_large.as_deref(), Some("http://x/y.jpg"));
        assert_eq!(record.thumbnail_medium, None);
        assert_eq!(record.thumbnail_small, None);
    }

    #[test]
    fn test_parse_uses_only_first_entry() {
        let body = r#"[
            {"thumbnail_small":"http://a/s.jpg"},
            {"thumbnail_large":"http://b/l.jpg"}
        ]"#;
        let record = MetadataRecord::parse(body).unwrap();
        assert_eq!(record.thumbnail_small.as_deref(), Some("http://a/s.jpg"));
        assert_eq!(record.thumbnail_large, None);
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let body =
            r#"[{"id":123,"title":"A video","thumbnail_medium":"https://i.vimeocdn.com/m.jpg"}]"#;
        let record = MetadataRecord::parse(body).unwrap();
        assert_eq!(
            record.thumbnail_medium.as_deref(),
            Some("https://i.vimeocdn.com/m.jpg")
        );
    }

    #[test]
    fn test_parse_empty_array_is_no_data() {
        assert_eq!(MetadataRecord::parse("[]"), None);
    }

    #[test]
    fn test_parse_invalid_json_is_no_data() {
        assert_eq!(MetadataRecord::parse(""), None);
        assert_eq!(MetadataRecord::parse("not json"), None);
        assert_eq!(MetadataRecord::parse("[{"), None);
        assert_eq!(MetadataRecord::parse("<html>404 Not Found</html>"), None);
    }

    #[test]
    fn test_parse_falsy_first_entry_is_no_data() {
        for body in ["[null]", "[false]", "[0]", r#"[""]"#, "[{}]"] {
            assert_eq!(MetadataRecord::parse(body), None, "body: {body}");
        }
    }

    #[test]
    fn test_parse_non_array_is_no_data() {
        assert_eq!(
            MetadataRecord::parse(r#"{"thumbnail_large":"http://x/y.jpg"}"#),
            None
        );
    }

    #[test]
    fn test_non_object_first_entry_has_no_thumbnails() {
        for body in [
            r#"[["http://x/l.jpg","http://x/m.jpg","http://x/s.jpg"]]"#,
            "[true]",
            "[5]",
            r#"["http://x/l.jpg"]"#,
        ] {
            assert_eq!(
                MetadataRecord::parse(body),
                Some(MetadataRecord::default()),
                "body: {body}"
            );
        }
    }

    #[test]
    fn test_non_string_fields_are_absent() {
        let body = r#"[{"thumbnail_large":42,"thumbnail_small":"http://x/s.jpg"}]"#;
        let record = MetadataRecord::parse(body).unwrap();
        assert_eq!(record.thumbnail_large, None);
        assert_eq!(record.thumbnail_small.as_deref(), Some("http://x/s.jpg"));
    }

    #[test]
    fn test_thumbnail_treats_empty_string_as_absent() {
        let record = MetadataRecord {
            thumbnail_large: Some(String::new()),
            thumbnail_medium: Some("http://x/m.jpg".to_string()),
            thumbnail_small: None,
        };
        assert_eq!(record.thumbnail(ThumbnailSize::Large), None);
        assert_eq!(record.thumbnail(ThumbnailSize::Medium), Some("http://x/m.jpg"));
        assert_eq!(record.thumbnail(ThumbnailSize::Small), None);
    }
}
