//! Picks the thumbnail URL to redirect to.

use tracing::debug;

use crate::domain::entities::{MetadataRecord, ThumbnailSize};

/// Returns the best thumbnail URL for `size`.
///
/// The requested tier is tried first. When it is missing and `fallback` is set,
/// smaller tiers are tried in order (`large -> medium -> small`), never larger ones.
/// Returns `None` when nothing usable is found.
pub fn select_thumbnail(
    record: &MetadataRecord,
    size: ThumbnailSize,
    fallback: bool,
) -> Option<String> {
    let mut current = Some(size);

    while let Some(candidate) = current {
        if let Some(url) = record.thumbnail(candidate) {
            return Some(url.to_string());
        }

        if !fallback {
            debug!("{} not found, fallback disabled", candidate);
            return None;
        }

        current = candidate.next_smaller();
        match current {
            Some(next) => debug!("{} not found, falling back to {}", candidate, next),
            None => debug!("{} not found, fallback chain exhausted", candidate),
        }
    }

    None
}
