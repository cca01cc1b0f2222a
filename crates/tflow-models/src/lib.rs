//! Shared data models for the TitanFlow content pipeline.
//!
//! This crate provides Serde-serializable types for:
//! - Viral video metadata and niche enrichment
//! - Content analysis results (hooks, formats, tactics, themes)
//! - Generated scripts and visual production plans
//! - Pipeline requests, per-stage status, and combined results

pub mod analysis;
pub mod pipeline;
pub mod platform;
pub mod script;
pub mod video;
pub mod visual_plan;

// Re-export common types
pub use analysis::{AnalysisRecord, HookPattern, NicheInsights, NicheScope};
pub use pipeline::{PipelineRequest, PipelineResult, StageReport, StageStatus};
pub use platform::Platform;
pub use script::{ScriptRecord, ScriptSection};
pub use video::VideoRecord;
pub use visual_plan::{SceneRecord, VisualPlanRecord};
