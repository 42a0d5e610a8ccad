//! Cache-augmented thumbnail resolution.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, error, warn};

use crate::domain::cache_policy::CachePolicy;
use crate::domain::entities::{MetadataRecord, RequestOptions, ThumbnailSize, VideoId};
use crate::domain::errors::ResolveError;
use crate::domain::thumbnail_selector::select_thumbnail;
use crate::domain::upstream::MetadataClient;
use crate::infrastructure::cache::CacheService;

/// Resolves a video id to a thumbnail URL.
///
/// Consults the cache first (unless disabled per request), then falls through to
/// the metadata API, parses the payload, selects a thumbnail and writes it back.
/// Each call performs at most one upstream request and at most one cache write.
#[derive(Clone)]
pub struct ThumbnailService {
    cache: Arc<dyn CacheService>,
    client: Arc<dyn MetadataClient>,
    policy: CachePolicy,
}

impl ThumbnailService {
    /// Creates a new thumbnail service.
    pub fn new(
        cache: Arc<dyn CacheService>,
        client: Arc<dyn MetadataClient>,
        policy: CachePolicy,
    ) -> Self {
        Self {
            cache,
            client,
            policy,
        }
    }

    /// Returns the URL to redirect to for `video_id`.
    ///
    /// # Flow
    ///
    /// 1. Cache lookup for `(video_id, size)`, skipped when `use_cache` is false.
    ///    A hit is returned without contacting upstream.
    /// 2. On a miss, fetch, parse, select and store. This part runs in its own
    ///    task, so dropping the returned future (client disconnect) does not
    ///    cancel the upstream call or the cache write.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UpstreamTransport`] if the metadata API cannot be reached
    /// - [`ResolveError::UpstreamData`] if the payload has no usable entry
    /// - [`ResolveError::ThumbnailNotFound`] if no size in the allowed chain is present
    ///
    /// Cache failures are never returned.
    pub async fn resolve(
        &self,
        video_id: &VideoId,
        options: &RequestOptions,
    ) -> Result<String, ResolveError> {
        if options.use_cache {
            if let Some(url) = self.cached(video_id, options.size).await {
                debug!("Using cached redirect for {}", video_id);
                return Ok(url);
            }
        } else {
            debug!("Cache bypassed for {}", video_id);
        }

        let service = self.clone();
        let video_id = video_id.clone();
        let options = *options;

        tokio::spawn(async move { service.resolve_uncached(&video_id, &options).await })
            .await
            .map_err(|e| {
                error!("Thumbnail resolution task failed: {}", e);
                ResolveError::TaskFailed(e.to_string())
            })?
    }

    /// Reads the cached URL, treating errors and malformed values as a miss.
    ///
    /// Malformed values are left in place; the next successful resolution overwrites them.
    async fn cached(&self, video_id: &VideoId, size: ThumbnailSize) -> Option<String> {
        let key = self.policy.key(video_id, size);

        match self.cache.get_url(&key).await {
            Ok(Some(url)) if CachePolicy::is_redirectable(&url) => {
                metrics::counter!("thumbnail_cache_hits_total").increment(1);
                Some(url)
            }
            Ok(Some(url)) => {
                debug!("Ignoring malformed cache entry {}: {:?}", key, url);
                metrics::counter!("thumbnail_cache_misses_total").increment(1);
                None
            }
            Ok(None) => {
                debug!("Cache not found for {}", key);
                metrics::counter!("thumbnail_cache_misses_total").increment(1);
                None
            }
            Err(e) => {
                warn!("Cache read failed for {}: {}", key, e);
                metrics::counter!("thumbnail_cache_errors_total").increment(1);
                None
            }
        }
    }

    async fn resolve_uncached(
        &self,
        video_id: &VideoId,
        options: &RequestOptions,
    ) -> Result<String, ResolveError> {
        let url = self.client.metadata_url(video_id);
        debug!("Fetching Vimeo data {}", url);
        metrics::counter!("thumbnail_upstream_requests_total").increment(1);

        let body = match self.client.fetch_metadata(video_id).await {
            Ok(body) => body,
            Err(source) => {
                error!("Error fetching data from Vimeo api ({}): {}", url, source);
                return Err(ResolveError::UpstreamTransport { url, source });
            }
        };

        let Some(record) = MetadataRecord::parse(&body) else {
            warn!("Received invalid response from Vimeo api ({}): {}", url, body);
            return Err(ResolveError::UpstreamData { url, body });
        };

        let Some(thumbnail) = select_thumbnail(&record, options.size, options.size_fallback)
        else {
            debug!(
                "No {} thumbnail for {} (fallback: {})",
                options.size, video_id, options.size_fallback
            );
            return Err(ResolveError::ThumbnailNotFound {
                url,
                size: options.size,
            });
        };

        self.store(video_id, options.size, &thumbnail).await;

        Ok(thumbnail)
    }

    /// Best-effort cache write; failures are logged and otherwise ignored.
    async fn store(&self, video_id: &VideoId, size: ThumbnailSize, url: &str) {
        let key = self.policy.key(video_id, size);
        let expires_at = self.policy.expires_at(Utc::now());

        match self.cache.set_url(&key, url, expires_at).await {
            Ok(()) => debug!("Cached {} to {}", url, key),
            Err(e) => error!("Cache write failed for [{} -> {}]: {}", key, url, e),
        }
    }
}
