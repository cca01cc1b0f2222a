//! Health check handler.

use axum::Json;
use chrono::Utc;
use serde::Serialize;

use tflow_agents::CompletionConfig;

/// Health response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    /// Whether completion credentials are configured
    pub completion_credentials: bool,
}

/// Health check endpoint (liveness probe).
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        completion_credentials: CompletionConfig::from_env().has_credentials(),
    })
}
