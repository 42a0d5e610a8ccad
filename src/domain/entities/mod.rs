//! Core domain entities.

mod metadata;
mod thumbnail_size;
mod video_id;

pub use metadata::MetadataRecord;
pub use thumbnail_size::{RequestOptions, ThumbnailSize};
pub use video_id::VideoId;
