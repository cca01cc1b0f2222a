//! Agent and pipeline configuration.

use std::time::Duration;

/// Completion service configuration.
///
/// Built once at process start and shared by reference; nothing mutates it
/// afterwards.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// API key for the completion service
    pub api_key: String,
    /// Service base URL (OpenAI-compatible)
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o".to_string(),
            temperature: 0.7,
            timeout: Duration::from_secs(30),
        }
    }
}

impl CompletionConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("TFLOW_API_KEY")
                .or_else(|_| std::env::var("OPENAI_API_KEY"))
                .unwrap_or_default(),
            base_url: std::env::var("TFLOW_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            model: std::env::var("TFLOW_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            temperature: std::env::var("TFLOW_TEMPERATURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.7),
            timeout: Duration::from_secs(
                std::env::var("TFLOW_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        }
    }

    /// True when an API key is present.
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty()
    }
}

/// Pipeline orchestration configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// On a stage's hard failure, substitute the stage default and keep
    /// going instead of halting the run.
    pub continue_on_failure: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            continue_on_failure: true,
        }
    }
}

impl PipelineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            continue_on_failure: std::env::var("TFLOW_CONTINUE_ON_FAILURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
        }
    }
}
