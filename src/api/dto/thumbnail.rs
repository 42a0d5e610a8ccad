//! Query parameters for the thumbnail redirect endpoint.

use url::form_urlencoded;

use crate::domain::entities::{RequestOptions, ThumbnailSize};
use crate::domain::errors::ResolveError;

/// Raw `?s=&sfb=&c=` parameters.
///
/// Flags are disabled only by the literal string `false`; any other value,
/// or no value, keeps the default.
#[derive(Debug, Default)]
pub struct ThumbnailQuery {
    /// Requested size: `large` (default when absent or empty), `medium` or `small`.
    pub s: Option<String>,
    /// Size fallback.
    pub sfb: Option<String>,
    /// Use cache.
    pub c: Option<String>,
}

impl ThumbnailQuery {
    /// Reads the parameters from a raw query string.
    ///
    /// Never fails. A repeated key keeps all of its values joined with `,`, so
    /// `?s=large&s=small` is an unknown size rather than a rejected request.
    /// Unknown keys are ignored.
    pub fn from_query_string(raw: Option<&str>) -> Self {
        let mut query = Self::default();

        for (key, value) in form_urlencoded::parse(raw.unwrap_or_default().as_bytes()) {
            let slot = match key.as_ref() {
                "s" => &mut query.s,
                "sfb" => &mut query.sfb,
                "c" => &mut query.c,
                _ => continue,
            };

            match slot.as_mut() {
                Some(existing) => {
                    existing.push(',');
                    existing.push_str(&value);
                }
                None => *slot = Some(value.into_owned()),
            }
        }

        query
    }

    /// Converts the query into validated [`RequestOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::UnsupportedSize`] for an unknown `s` value.
    pub fn into_options(self) -> Result<RequestOptions, ResolveError> {
        let size = match self.s.as_deref() {
            None | Some("") => ThumbnailSize::default(),
            Some(raw) => raw.parse()?,
        };

        Ok(RequestOptions {
            size,
            size_fallback: !is_literal_false(self.sfb.as_deref()),
            use_cache: !is_literal_false(self.c.as_deref()),
        })
    }
}

fn is_literal_false(value: Option<&str>) -> bool {
    value == Some("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(s: Option<&str>, sfb: Option<&str>, c: Option<&str>) -> ThumbnailQuery {
        ThumbnailQuery {
            s: s.map(String::from),
            sfb: sfb.map(String::from),
            c: c.map(String::from),
        }
    }

    #[test]
    fn test_from_query_string() {
        let query = ThumbnailQuery::from_query_string(Some("s=medium&sfb=false&x=1"));
        assert_eq!(query.s.as_deref(), Some("medium"));
        assert_eq!(query.sfb.as_deref(), Some("false"));
        assert_eq!(query.c, None);

        let query = ThumbnailQuery::from_query_string(None);
        assert_eq!(query.s, None);
    }

    #[test]
    fn test_from_query_string_decodes_values() {
        let query = ThumbnailQuery::from_query_string(Some("s=%6Carge&c=f%61lse"));
        let options = query.into_options().unwrap();
        assert_eq!(options.size, ThumbnailSize::Large);
        assert!(!options.use_cache);
    }

    #[test]
    fn test_repeated_size_is_unsupported() {
        let result = ThumbnailQuery::from_query_string(Some("s=large&s=small")).into_options();
        assert!(matches!(result, Err(ResolveError::UnsupportedSize(s)) if s == "large,small"));
    }

    #[test]
    fn test_repeated_flag_is_not_literal_false() {
        let options = ThumbnailQuery::from_query_string(Some("sfb=false&sfb=false"))
            .into_options()
            .unwrap();
        assert!(options.size_fallback);
    }

    #[test]
    fn test_defaults() {
        let options = ThumbnailQuery::default().into_options().unwrap();
        assert_eq!(options, RequestOptions::default());
    }

    #[test]
    fn test_all_parameters() {
        let options = query(Some("small"), Some("false"), Some("false"))
            .into_options()
            .unwrap();

        assert_eq!(options.size, ThumbnailSize::Small);
        assert!(!options.size_fallback);
        assert!(!options.use_cache);
    }

    #[test]
    fn test_only_literal_false_disables_flags() {
        for value in ["0", "no", "False", "FALSE", "", "true"] {
            let options = query(None, Some(value), Some(value)).into_options().unwrap();
            assert!(options.size_fallback, "sfb={value:?}");
            assert!(options.use_cache, "c={value:?}");
        }
    }

    #[test]
    fn test_empty_size_means_default() {
        let options = query(Some(""), None, None).into_options().unwrap();
        assert_eq!(options.size, ThumbnailSize::Large);
    }

    #[test]
    fn test_unknown_size_is_rejected() {
        let result = query(Some("huge"), None, None).into_options();
        assert!(matches!(result, Err(ResolveError::UnsupportedSize(s)) if s == "huge"));
    }
}
