//! Cache service trait and error types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    ConnectionError(String),

    #[error("Cache operation error: {0}")]
    OperationError(String),

    #[error("Cache operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value store for resolved thumbnail URLs.
///
/// Implementations report failures as [`CacheError`]; the caller decides how to
/// degrade (a failed read is a miss, a failed write is skipped).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with absolute expiry
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache for single-node runs
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the value stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on cache hit
    /// - `Ok(None)` on cache miss or expired entry
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the backend is unreachable or times out.
    async fn get_url(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `url` under `key`, expiring at the absolute time `expires_at`.
    ///
    /// Overwrites any existing value.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] if the write fails or times out.
    async fn set_url(&self, key: &str, url: &str, expires_at: DateTime<Utc>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint and the admin CLI.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
