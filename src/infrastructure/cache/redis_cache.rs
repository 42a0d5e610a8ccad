//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use redis::{AsyncCommands, Client, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache for resolved thumbnail URLs.
///
/// Uses `ConnectionManager` for connection reuse and automatic reconnects.
/// Every command is bounded by the configured timeout so an unresponsive
/// Redis degrades requests instead of hanging them.
pub struct RedisCache {
    client: ConnectionManager,
    timeout: Duration,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `timeout` - Upper bound for every cache command (`CACHE_TIMEOUT_MS`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, timeout: Duration) -> CacheResult<Self> {
        info!("Connecting to Redis at {}", redis_url);

        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(timeout * 4, ConnectionManager::new(client))
            .await
            .map_err(|_| CacheError::ConnectionError("Timed out connecting to Redis".to_string()))?
            .map_err(|e| {
                CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
            })?;

        let cache = Self {
            client: manager,
            timeout,
        };

        let mut test_conn = cache.client.clone();
        cache
            .bounded(async move { test_conn.ping::<()>().await })
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(cache)
    }

    /// Runs a Redis command under the configured timeout.
    async fn bounded<T>(&self, command: impl Future<Output = RedisResult<T>>) -> CacheResult<T> {
        tokio::time::timeout(self.timeout, command)
            .await
            .map_err(|_| CacheError::Timeout(self.timeout))?
            .map_err(|e| CacheError::OperationError(e.to_string()))
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.client.clone();

        let cached = self
            .bounded(async move { conn.get::<_, Option<String>>(key).await })
            .await?;

        match &cached {
            Some(url) => debug!("Cache HIT: {} -> {}", key, url),
            None => debug!("Cache MISS: {}", key),
        }

        Ok(cached)
    }

    async fn set_url(&self, key: &str, url: &str, expires_at: DateTime<Utc>) -> CacheResult<()> {
        let mut conn = self.client.clone();

        self.bounded(async move {
            redis::pipe()
                .atomic()
                .set(key, url)
                .ignore()
                .expire_at(key, expires_at.timestamp())
                .ignore()
                .query_async::<()>(&mut conn)
                .await
        })
        .await?;

        debug!("Cache SET: {} -> {} (expires at {})", key, url, expires_at);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        self.bounded(async move { conn.ping::<()>().await })
            .await
            .is_ok()
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
