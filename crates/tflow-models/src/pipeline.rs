//! Pipeline request/result models and per-stage status.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisRecord;
use crate::platform::Platform;
use crate::script::ScriptRecord;
use crate::video::VideoRecord;
use crate::visual_plan::VisualPlanRecord;

/// Default advisory script duration in seconds.
pub const DEFAULT_TARGET_DURATION_SECS: u32 = 50;

/// Request to run the full three-stage pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PipelineRequest {
    /// Viral videos to analyze (required, non-empty)
    pub videos: Vec<VideoRecord>,

    /// Target platform for the script and plan
    #[serde(default)]
    pub platform: Platform,

    /// Advisory script duration in seconds
    #[serde(default = "default_target_duration")]
    pub target_duration: u32,

    /// Optional niche to scope the analysis to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_niche: Option<String>,
}

fn default_target_duration() -> u32 {
    DEFAULT_TARGET_DURATION_SECS
}

impl PipelineRequest {
    /// Create a request with default platform, duration, and no niche.
    pub fn new(videos: Vec<VideoRecord>) -> Self {
        Self {
            videos,
            platform: Platform::default(),
            target_duration: DEFAULT_TARGET_DURATION_SECS,
            target_niche: None,
        }
    }

    /// Validate the request.
    pub fn validate(&self) -> Result<(), String> {
        if self.videos.is_empty() {
            return Err("At least one video is required".to_string());
        }

        if self.target_duration == 0 {
            return Err("Target duration must be a positive number of seconds".to_string());
        }

        Ok(())
    }
}

/// How a pipeline stage concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// Real model output, decoded cleanly
    Succeeded,
    /// Completion call succeeded but the content could not be decoded;
    /// the schema default was substituted
    Fallback,
    /// Completion call failed and the stage default was substituted
    /// (continue-on-failure mode)
    FailedDefault,
    /// Completion call failed and the pipeline halted at this stage
    Failed,
    /// Stage was never reached
    #[default]
    Skipped,
}

impl StageStatus {
    /// Returns the status as a string for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Succeeded => "succeeded",
            Self::Fallback => "fallback",
            Self::FailedDefault => "failed_default",
            Self::Failed => "failed",
            Self::Skipped => "skipped",
        }
    }

    /// True when the stage's record came from real model output.
    pub fn used_model_output(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// True when the stage produced a record the next stage can consume.
    pub fn produced_record(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Fallback | Self::FailedDefault)
    }
}

/// Per-stage status for one pipeline run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StageReport {
    pub analysis: StageStatus,
    pub script: StageStatus,
    pub visual_plan: StageStatus,
}

/// Aggregate result of a pipeline run.
///
/// A record is `None` exactly when its stage did not produce one (status
/// `failed` or `skipped`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct PipelineResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<ScriptRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_plan: Option<VisualPlanRecord>,

    pub stages: StageReport,

    /// Error detail for the stage that halted the run, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PipelineResult {
    /// An empty result with every stage skipped.
    pub fn empty() -> Self {
        Self {
            analysis: None,
            script: None,
            visual_plan: None,
            stages: StageReport::default(),
            error: None,
        }
    }

    /// True when all three stages produced records.
    pub fn is_complete(&self) -> bool {
        self.analysis.is_some() && self.script.is_some() && self.visual_plan.is_some()
    }
}
