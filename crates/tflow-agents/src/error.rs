//! Agent error types.

use thiserror::Error;

pub type AgentResult<T> = Result<T, AgentError>;

#[derive(Debug, Error)]
pub enum AgentError {
    /// The remote completion call failed: network, timeout, non-2xx status,
    /// or an empty response envelope.
    #[error("Completion service error: {0}")]
    Service(String),

    /// Caller-supplied input violated a required constraint. Raised before
    /// any remote call is made.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Missing or invalid process configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AgentError {
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for remote-service failures, the only stage-level error the
    /// orchestrator may substitute a default for.
    pub fn is_service(&self) -> bool {
        matches!(self, Self::Service(_))
    }
}
