#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use vimeo_thumbnail::application::services::ThumbnailService;
use vimeo_thumbnail::domain::cache_policy::CachePolicy;
use vimeo_thumbnail::domain::entities::VideoId;
use vimeo_thumbnail::domain::upstream::{MetadataClient, UpstreamError};
use vimeo_thumbnail::infrastructure::cache::{CacheService, MemoryCache};
use vimeo_thumbnail::state::AppState;

pub const TEST_API_URL: &str = "https://vimeo.test/api/v2/video/";

/// What the stub answers for every fetch.
pub enum StubResponse {
    Body(String),
    TransportError,
}

/// Metadata client that counts calls and returns a canned response.
pub struct StubMetadataClient {
    response: StubResponse,
    calls: AtomicUsize,
}

impl StubMetadataClient {
    pub fn with_body(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::Body(body.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            response: StubResponse::TransportError,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataClient for StubMetadataClient {
    fn metadata_url(&self, video_id: &VideoId) -> String {
        format!("{}{}.json", TEST_API_URL, video_id)
    }

    async fn fetch_metadata(&self, _video_id: &VideoId) -> Result<String, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match &self.response {
            StubResponse::Body(body) => Ok(body.clone()),
            StubResponse::TransportError => Err(UpstreamError::Transport(
                "error trying to connect: Connection refused".to_string(),
            )),
        }
    }
}

pub fn create_test_state(client: Arc<StubMetadataClient>) -> (AppState, Arc<MemoryCache>) {
    let memory = Arc::new(MemoryCache::new(1_000));
    let cache: Arc<dyn CacheService> = memory.clone();

    let service = ThumbnailService::new(cache.clone(), client, CachePolicy::default());
    let state = AppState::new(Arc::new(service), cache);

    (state, memory)
}

pub fn cache_key(video_id: &str, size: &str) -> String {
    format!("vimeo-thumbnail:{}:{}", video_id, size)
}
