//! HTTP server initialization and runtime setup.
//!
//! Handles cache setup, upstream client construction, and Axum server lifecycle.

use crate::application::services::ThumbnailService;
use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::infrastructure::upstream::VimeoClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cache backend (Redis, in-memory, or NullCache fallback)
/// - Vimeo metadata client
/// - Axum HTTP server with graceful shutdown on SIGTERM / Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = connect_cache(&config).await;
    let thumbnail_service = Arc::new(build_thumbnail_service(&config, cache.clone())?);

    let state = AppState::new(thumbnail_service, cache);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Selects the cache backend.
///
/// - `redis_url` set and reachable: [`RedisCache`]
/// - `redis_url` set but unreachable: [`NullCache`], requests still succeed uncached
/// - no `redis_url`: [`MemoryCache`]
pub async fn connect_cache(config: &Config) -> Arc<dyn CacheService> {
    match &config.redis_url {
        Some(redis_url) => match RedisCache::connect(redis_url, config.cache_timeout()).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
                Arc::new(NullCache::new())
            }
        },
        None => {
            tracing::info!("Cache enabled (in-memory)");
            Arc::new(MemoryCache::new(config.cache_memory_capacity))
        }
    }
}

/// Wires the resolver to `cache` and a [`VimeoClient`] built from `config`.
///
/// # Errors
///
/// Returns an error if `VIMEO_API_URL` is invalid or the HTTP client cannot be built.
pub fn build_thumbnail_service(
    config: &Config,
    cache: Arc<dyn CacheService>,
) -> Result<ThumbnailService> {
    let client = VimeoClient::new(&config.vimeo_api_url, config.upstream_timeout())?;

    Ok(ThumbnailService::new(
        cache,
        Arc::new(client),
        config.cache_policy(),
    ))
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl-C, shutting down"),
        _ = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
