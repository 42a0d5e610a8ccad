//! `reqwest`-backed client for the Vimeo simple API.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::domain::entities::VideoId;
use crate::domain::upstream::{MetadataClient, UpstreamError};

/// Default endpoint serving `<id>.json` metadata documents.
pub const DEFAULT_VIMEO_API_URL: &str = "https://vimeo.com/api/v2/video/";

/// Client for `GET <base>/<id>.json`.
#[derive(Clone)]
pub struct VimeoClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl VimeoClient {
    /// Creates a client for `base_url` with a per-request `timeout`.
    ///
    /// A missing trailing slash on `base_url` is added, so
    /// `https://vimeo.com/api/v2/video` and `https://vimeo.com/api/v2/video/` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute http(s) URL or the
    /// HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).context("Invalid Vimeo API URL")?;

        if !matches!(base_url.scheme(), "http" | "https") {
            anyhow::bail!("Vimeo API URL must use http or https, got '{}'", base_url);
        }

        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    fn map_error(&self, error: reqwest::Error) -> UpstreamError {
        if error.is_timeout() {
            UpstreamError::Timeout(self.timeout)
        } else {
            UpstreamError::Transport(error.to_string())
        }
    }
}

#[async_trait]
impl MetadataClient for VimeoClient {
    fn metadata_url(&self, video_id: &VideoId) -> String {
        format!("{}{}.json", self.base_url, video_id)
    }

    async fn fetch_metadata(&self, video_id: &VideoId) -> Result<String, UpstreamError> {
        let url = self.metadata_url(video_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        debug!("Vimeo api responded {} for {}", response.status(), url);

        response.text().await.map_err(|e| self.map_error(e))
    }
}
