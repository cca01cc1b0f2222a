//! LLM agents and pipeline orchestration for TitanFlow.
//!
//! Three agents run in sequence: [`ContentStrategyAgent`] extracts viral
//! patterns from video metadata, [`ContentScriptwriterAgent`] turns the
//! analysis into a short-form script, and [`VisualContentPlannerAgent`]
//! breaks the script into a shot-by-shot production plan. The
//! [`PipelineOrchestrator`] chains them with per-stage status tracking and a
//! configurable continue-on-failure policy.
//!
//! Every agent follows the same shape: build a prompt, call the
//! [`CompletionClient`], decode the response with the shared parser, and
//! substitute a deterministic default when the content cannot be decoded.

pub mod completion;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod outcome;
pub mod parser;
pub mod planner;
pub mod prompts;
pub mod scriptwriter;
pub mod strategist;

pub use completion::{CompletionClient, CompletionRequest, HttpCompletionClient};
pub use config::{CompletionConfig, PipelineConfig};
pub use error::{AgentError, AgentResult};
pub use orchestrator::{PipelineOrchestrator, PipelineState};
pub use outcome::Outcome;
pub use planner::VisualContentPlannerAgent;
pub use scriptwriter::ContentScriptwriterAgent;
pub use strategist::ContentStrategyAgent;
