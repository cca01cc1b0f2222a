//! Per-stage API handlers.
//!
//! Each stage of the pipeline is also exposed on its own so callers can
//! analyze, script, or plan independently. Every response carries the stage
//! status alongside the record, so callers always know whether they received
//! real model output or a fallback default.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use tflow_models::pipeline::DEFAULT_TARGET_DURATION_SECS;
use tflow_models::{AnalysisRecord, Platform, ScriptRecord, StageStatus, VideoRecord, VisualPlanRecord};

use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Analyze
// ============================================================================

/// Request to analyze a batch of viral videos.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub videos: Vec<VideoRecord>,
    #[serde(default)]
    pub target_niche: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisRecord,
    pub status: StageStatus,
}

/// Analyze viral videos and extract structured insights.
pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<Json<AnalyzeResponse>> {
    let (analysis, status) = state
        .orchestrator
        .analyze(&request.videos, request.target_niche.as_deref())
        .await?;

    info!(
        videos = request.videos.len(),
        status = status.as_str(),
        "Analysis request served"
    );

    Ok(Json(AnalyzeResponse { analysis, status }))
}

// ============================================================================
// Generate script
// ============================================================================

/// Request to generate a script from an analysis record.
#[derive(Debug, Deserialize)]
pub struct GenerateScriptRequest {
    pub analysis: AnalysisRecord,
    #[serde(default)]
    pub platform: Platform,
    #[serde(default = "default_duration")]
    pub target_duration: u32,
}

fn default_duration() -> u32 {
    DEFAULT_TARGET_DURATION_SECS
}

#[derive(Debug, Serialize)]
pub struct GenerateScriptResponse {
    pub script: ScriptRecord,
    pub status: StageStatus,
}

/// Generate an optimized short-form video script.
pub async fn generate_script(
    State(state): State<AppState>,
    Json(request): Json<GenerateScriptRequest>,
) -> ApiResult<Json<GenerateScriptResponse>> {
    let (script, status) = state
        .orchestrator
        .write_script(&request.analysis, &request.platform, request.target_duration)
        .await?;

    info!(
        platform = %request.platform,
        status = status.as_str(),
        "Script request served"
    );

    Ok(Json(GenerateScriptResponse { script, status }))
}

// ============================================================================
// Create visual plan
// ============================================================================

/// Request to create a visual plan from a script record.
#[derive(Debug, Deserialize)]
pub struct CreateVisualPlanRequest {
    pub script: ScriptRecord,
    /// Platform override; defaults to the script's platform
    #[serde(default)]
    pub platform: Option<Platform>,
}

#[derive(Debug, Serialize)]
pub struct CreateVisualPlanResponse {
    pub visual_plan: VisualPlanRecord,
    pub status: StageStatus,
}

/// Create a detailed visual production plan from a script.
pub async fn create_visual_plan(
    State(state): State<AppState>,
    Json(request): Json<CreateVisualPlanRequest>,
) -> ApiResult<Json<CreateVisualPlanResponse>> {
    let platform = request
        .platform
        .unwrap_or_else(|| request.script.platform.clone());

    let (visual_plan, status) = state
        .orchestrator
        .plan_visuals(&request.script, &platform)
        .await?;

    info!(
        scenes = visual_plan.scenes.len(),
        status = status.as_str(),
        "Visual plan request served"
    );

    Ok(Json(CreateVisualPlanResponse { visual_plan, status }))
}
