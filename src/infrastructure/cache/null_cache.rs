//! No-op cache implementation for disabled caching.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when Redis is configured but unreachable at startup. Every lookup is a
/// miss and every write is dropped, so each request goes to the upstream API.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get_url(&self, _key: &str) -> CacheResult<Option<String>> {
        Ok(None)
    }

    async fn set_url(&self, _key: &str, _url: &str, _expires_at: DateTime<Utc>) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "none"
    }
}
