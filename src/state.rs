//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::ThumbnailService;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub thumbnail_service: Arc<ThumbnailService>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    pub fn new(thumbnail_service: Arc<ThumbnailService>, cache: Arc<dyn CacheService>) -> Self {
        Self {
            thumbnail_service,
            cache,
        }
    }
}
