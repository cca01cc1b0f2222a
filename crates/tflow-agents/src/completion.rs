//! Completion service client.
//!
//! Wraps the remote language-model call behind a trait so the pipeline can
//! be exercised against fakes. The production client speaks the
//! OpenAI-compatible chat-completions protocol over HTTPS with a bounded
//! timeout. No retries happen at this layer; retry policy, if any, belongs
//! to the orchestrator.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::CompletionConfig;
use crate::error::{AgentError, AgentResult};

/// One completion exchange: role-tagged instructions plus generation
/// parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction establishing the agent persona
    pub system_prompt: String,
    /// User instruction embedding the serialized input data
    pub user_prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// Text-in, text-out completion call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the request and return the model's raw text.
    async fn complete(&self, request: &CompletionRequest) -> AgentResult<String>;
}

/// Chat-completions API request.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Chat-completions API response.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible completion service.
#[derive(Debug)]
pub struct HttpCompletionClient {
    config: CompletionConfig,
    client: Client,
}

impl HttpCompletionClient {
    /// Create a new client. Fails when no API key is configured or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: CompletionConfig) -> AgentResult<Self> {
        if !config.has_credentials() {
            return Err(AgentError::config_error(
                "TFLOW_API_KEY not set. Completion calls cannot be made.",
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AgentError::config_error(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn complete(&self, request: &CompletionRequest) -> AgentResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let body = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system_prompt.clone(),
                },
                ChatMessage {
                    role: "user",
                    content: request.user_prompt.clone(),
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        debug!(model = %self.config.model, max_tokens = request.max_tokens, "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AgentError::service(format!(
                        "Completion request timed out after {:?}",
                        self.config.timeout
                    ))
                } else {
                    AgentError::service(format!("Completion request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AgentError::service(format!(
                "Completion service returned {status}: {error_text}"
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| AgentError::service(format!("Failed to parse completion envelope: {e}")))?;

        let text = chat_response
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AgentError::service("Empty completion envelope"))?;

        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(base_url: String) -> CompletionConfig {
        CompletionConfig {
            api_key: "test-key".to_string(),
            base_url,
            ..CompletionConfig::default()
        }
    }

    fn sample_request() -> CompletionRequest {
        CompletionRequest {
            system_prompt: "You are a strategist.".to_string(),
            user_prompt: "Analyze these videos.".to_string(),
            temperature: 0.7,
            max_tokens: 300,
        }
    }

    #[test]
    fn test_new_requires_api_key() {
        let err = HttpCompletionClient::new(CompletionConfig::default()).unwrap_err();
        assert!(matches!(err, AgentError::Config(_)));
    }

    #[tokio::test]
    async fn test_complete_returns_message_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "  {\"ok\": true}  "}}]
            })))
            .mount(&server)
            .await;

        let client = HttpCompletionClient::new(test_config(server.uri())).unwrap();
        let text = client.complete(&sample_request()).await.unwrap();
        assert_eq!(text, "{\"ok\": true}");
    }

    #[tokio::test]
    async fn test_complete_maps_server_error_to_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = HttpCompletionClient::new(test_config(server.uri())).unwrap();
        let err = client.complete(&sample_request()).await.unwrap_err();
        assert!(err.is_service());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_complete_rejects_empty_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"content": "   "}}]
            })))
            .mount(&server)
            .await;

        let client = HttpCompletionClient::new(test_config(server.uri())).unwrap();
        let err = client.complete(&sample_request()).await.unwrap_err();
        assert!(err.is_service());
    }

    #[tokio::test]
    async fn test_complete_rejects_missing_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = HttpCompletionClient::new(test_config(server.uri())).unwrap();
        let err = client.complete(&sample_request()).await.unwrap_err();
        assert!(err.is_service());
    }
}
