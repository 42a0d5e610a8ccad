//! DTOs for health check endpoint.

use serde::Serialize;

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health status for each system component.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub cache: CacheCheck,
}

/// Resolution cache status.
#[derive(Debug, Serialize)]
pub struct CacheCheck {
    pub status: String,

    /// `redis`, `memory` or `none`.
    pub backend: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CacheCheck {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}
