//! Application state.

use std::sync::Arc;

use tflow_agents::{
    AgentResult, CompletionClient, CompletionConfig, HttpCompletionClient, PipelineConfig,
    PipelineOrchestrator,
};

use crate::config::ApiConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub orchestrator: Arc<PipelineOrchestrator>,
}

impl AppState {
    /// Create application state from the environment. Fails when no
    /// completion credentials are configured.
    pub fn new(config: ApiConfig) -> AgentResult<Self> {
        let client = HttpCompletionClient::new(CompletionConfig::from_env())?;
        Ok(Self::with_client(
            config,
            Arc::new(client),
            PipelineConfig::from_env(),
        ))
    }

    /// Create application state around an existing completion client.
    pub fn with_client(
        config: ApiConfig,
        client: Arc<dyn CompletionClient>,
        pipeline_config: PipelineConfig,
    ) -> Self {
        Self {
            config,
            orchestrator: Arc::new(PipelineOrchestrator::new(client, pipeline_config)),
        }
    }
}
