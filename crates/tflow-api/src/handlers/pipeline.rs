//! Full pipeline handler.

use axum::extract::State;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use tflow_models::{PipelineRequest, PipelineResult};

use crate::error::ApiResult;
use crate::state::AppState;

/// Run the complete content creation pipeline:
/// 1. Analyze viral videos
/// 2. Generate an optimized script
/// 3. Create a detailed visual production plan
///
/// Returns the records from all three stages with a per-stage status.
pub async fn full_pipeline(
    State(state): State<AppState>,
    Json(request): Json<PipelineRequest>,
) -> ApiResult<Json<PipelineResult>> {
    let run_id = Uuid::new_v4();

    info!(
        %run_id,
        videos = request.videos.len(),
        platform = %request.platform,
        "Full pipeline run requested"
    );

    let result = state.orchestrator.run(request).await?;

    info!(
        %run_id,
        analysis = result.stages.analysis.as_str(),
        script = result.stages.script.as_str(),
        visual_plan = result.stages.visual_plan.as_str(),
        "Full pipeline run finished"
    );

    Ok(Json(result))
}
