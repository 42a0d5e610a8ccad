//! In-process cache backed by `moka`.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Debug, Clone)]
struct CachedUrl {
    url: String,
    expires_at: DateTime<Utc>,
}

impl CachedUrl {
    fn remaining(&self) -> Duration {
        (self.expires_at - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}

/// Evicts each entry at its own absolute expiration time.
struct AbsoluteExpiry;

impl Expiry<String, CachedUrl> for AbsoluteExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CachedUrl,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.remaining())
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedUrl,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.remaining())
    }
}

/// Bounded in-memory cache used when no Redis instance is configured.
///
/// Entries are local to the process, so they are lost on restart and not shared
/// between replicas.
pub struct MemoryCache {
    entries: Cache<String, CachedUrl>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_capacity` entries.
    pub fn new(max_capacity: u64) -> Self {
        info!("Using in-memory cache (capacity: {})", max_capacity);

        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(AbsoluteExpiry)
            .build();

        Self { entries }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_url(&self, key: &str) -> CacheResult<Option<String>> {
        match self.entries.get(key).await {
            Some(entry) if entry.expires_at > Utc::now() => {
                debug!("Memory cache HIT: {}", key);
                Ok(Some(entry.url))
            }
            Some(_) => {
                debug!("Memory cache entry expired: {}", key);
                self.entries.invalidate(key).await;
                Ok(None)
            }
            None => {
                debug!("Memory cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set_url(&self, key: &str, url: &str, expires_at: DateTime<Utc>) -> CacheResult<()> {
        self.entries
            .insert(
                key.to_string(),
                CachedUrl {
                    url: url.to_string(),
                    expires_at,
                },
            )
            .await;

        debug!("Memory cache SET: {} -> {} (expires at {})", key, url, expires_at);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
