//! Pipeline orchestrator.
//!
//! Chains the three agents as an explicit state machine:
//!
//! ```text
//! Start ──analyze──► Analyzed ──write──► Scripted ──plan──► Planned ──► Done
//! ```
//!
//! Caller input is validated before any remote call. A stage's hard failure
//! either halts the run (partial result plus error detail) or, with
//! `continue_on_failure`, substitutes the stage's default record and keeps
//! going. Stages are never retried; parser-level fallbacks are handled
//! inside the agents and surface here only as a status.

use std::sync::Arc;

use tracing::{info, warn};

use tflow_models::{
    AnalysisRecord, PipelineRequest, PipelineResult, Platform, ScriptRecord, StageReport,
    StageStatus, VideoRecord, VisualPlanRecord,
};

use crate::completion::CompletionClient;
use crate::config::PipelineConfig;
use crate::error::{AgentError, AgentResult};
use crate::outcome::Outcome;
use crate::planner::VisualContentPlannerAgent;
use crate::scriptwriter::ContentScriptwriterAgent;
use crate::strategist::ContentStrategyAgent;

/// Pipeline progress states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Start,
    Analyzed,
    Scripted,
    Planned,
    Done,
}

impl PipelineState {
    /// The state reached when the current stage completes.
    pub fn next(self) -> Self {
        match self {
            Self::Start => Self::Analyzed,
            Self::Analyzed => Self::Scripted,
            Self::Scripted => Self::Planned,
            // Planned -> Done is immediate; Done is terminal
            Self::Planned | Self::Done => Self::Done,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Analyzed => "analyzed",
            Self::Scripted => "scripted",
            Self::Planned => "planned",
            Self::Done => "done",
        }
    }
}

/// Orchestrates the analyze → script → plan pipeline.
///
/// Holds no per-run state: `run` owns all of a run's records, so concurrent
/// runs over the same orchestrator share nothing mutable.
pub struct PipelineOrchestrator {
    strategist: ContentStrategyAgent,
    scriptwriter: ContentScriptwriterAgent,
    planner: VisualContentPlannerAgent,
    config: PipelineConfig,
}

impl PipelineOrchestrator {
    pub fn new(client: Arc<dyn CompletionClient>, config: PipelineConfig) -> Self {
        Self {
            strategist: ContentStrategyAgent::new(Arc::clone(&client)),
            scriptwriter: ContentScriptwriterAgent::new(Arc::clone(&client)),
            planner: VisualContentPlannerAgent::new(client),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the analysis stage on its own, with boundary validation.
    pub async fn analyze(
        &self,
        videos: &[VideoRecord],
        target_niche: Option<&str>,
    ) -> AgentResult<(AnalysisRecord, StageStatus)> {
        if videos.is_empty() {
            return Err(AgentError::validation("At least one video is required"));
        }

        match self.strategist.analyze(videos, target_niche).await {
            Outcome::Success(record) => Ok((record, StageStatus::Succeeded)),
            Outcome::Fallback(record) => Ok((record, StageStatus::Fallback)),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Run the scriptwriting stage on its own, with boundary validation.
    pub async fn write_script(
        &self,
        analysis: &AnalysisRecord,
        platform: &Platform,
        target_duration_secs: u32,
    ) -> AgentResult<(ScriptRecord, StageStatus)> {
        if target_duration_secs == 0 {
            return Err(AgentError::validation(
                "Target duration must be a positive number of seconds",
            ));
        }

        match self
            .scriptwriter
            .write(analysis, platform, target_duration_secs)
            .await
        {
            Outcome::Success(record) => Ok((record, StageStatus::Succeeded)),
            Outcome::Fallback(record) => Ok((record, StageStatus::Fallback)),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Run the visual planning stage on its own, with boundary validation.
    pub async fn plan_visuals(
        &self,
        script: &ScriptRecord,
        platform: &Platform,
    ) -> AgentResult<(VisualPlanRecord, StageStatus)> {
        if script.sections.is_empty() {
            return Err(AgentError::validation(
                "Script must have at least one section",
            ));
        }

        match self.planner.plan(script, platform).await {
            Outcome::Success(record) => Ok((record, StageStatus::Succeeded)),
            Outcome::Fallback(record) => Ok((record, StageStatus::Fallback)),
            Outcome::Failure(e) => Err(e),
        }
    }

    /// Run the full three-stage pipeline.
    ///
    /// Returns `Err` only for caller-input validation failures, raised before
    /// any remote call. Stage failures are reported through the per-stage
    /// status in the result; in halt mode the remaining stages stay
    /// `skipped` and the error detail is carried on the result.
    pub async fn run(&self, request: PipelineRequest) -> AgentResult<PipelineResult> {
        request.validate().map_err(AgentError::validation)?;

        let mut state = PipelineState::Start;
        let mut stages = StageReport::default();
        let mut result = PipelineResult::empty();

        info!(
            videos = request.videos.len(),
            platform = %request.platform,
            target_duration = request.target_duration,
            "Pipeline run started"
        );

        // Start -> Analyzed
        let outcome = self
            .strategist
            .analyze(&request.videos, request.target_niche.as_deref())
            .await;
        let analysis = match self.resolve(outcome, &mut stages.analysis, AnalysisRecord::fallback) {
            Some(record) => record,
            None => {
                result.stages = stages;
                result.error = Some("Analysis stage failed".to_string());
                return Ok(result);
            }
        };
        state = state.next();
        info!(state = state.as_str(), status = stages.analysis.as_str(), "Stage complete");
        result.analysis = Some(analysis.clone());

        // Analyzed -> Scripted
        let outcome = self
            .scriptwriter
            .write(&analysis, &request.platform, request.target_duration)
            .await;
        let script = match self.resolve(outcome, &mut stages.script, || {
            ScriptRecord::fallback(request.platform.clone(), request.target_duration)
        }) {
            Some(record) => record,
            None => {
                result.stages = stages;
                result.error = Some("Scriptwriting stage failed".to_string());
                return Ok(result);
            }
        };
        state = state.next();
        info!(state = state.as_str(), status = stages.script.as_str(), "Stage complete");
        result.script = Some(script.clone());

        // Scripted -> Planned
        let outcome = self.planner.plan(&script, &request.platform).await;
        let plan = match self.resolve(outcome, &mut stages.visual_plan, || {
            VisualPlanRecord::fallback(&script)
        }) {
            Some(record) => record,
            None => {
                result.stages = stages;
                result.error = Some("Visual planning stage failed".to_string());
                return Ok(result);
            }
        };
        state = state.next();
        info!(state = state.as_str(), status = stages.visual_plan.as_str(), "Stage complete");
        result.visual_plan = Some(plan);

        // Planned -> Done, immediately
        state = state.next();
        debug_assert_eq!(state, PipelineState::Done);

        result.stages = stages;
        info!(state = state.as_str(), "Pipeline run complete");
        Ok(result)
    }

    /// Apply the failure policy to one stage's outcome. Returns the record
    /// to hand to the next stage, or `None` when the run must halt.
    fn resolve<T>(
        &self,
        outcome: Outcome<T>,
        status: &mut StageStatus,
        default: impl FnOnce() -> T,
    ) -> Option<T> {
        match outcome {
            Outcome::Success(record) => {
                *status = StageStatus::Succeeded;
                Some(record)
            }
            Outcome::Fallback(record) => {
                *status = StageStatus::Fallback;
                Some(record)
            }
            Outcome::Failure(e) if self.config.continue_on_failure => {
                warn!(error = %e, "Stage failed; substituting default record and continuing");
                *status = StageStatus::FailedDefault;
                Some(default())
            }
            Outcome::Failure(e) => {
                warn!(error = %e, "Stage failed; halting pipeline");
                *status = StageStatus::Failed;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::completion::CompletionRequest;

    const ANALYSIS_JSON: &str = r#"{
        "hook_patterns": [{"type": "question-based", "example": "Ever wondered?"}],
        "format_trends": ["Hook then payoff"],
        "engagement_tactics": ["Open loops"],
        "content_themes": ["Productivity"],
        "summary": "Be quick."
    }"#;

    const SCRIPT_JSON: &str = r#"{
        "title": "Morning reset",
        "hook": "Your mornings are broken.",
        "sections": [
            {"narration": "You wake up reactive.", "visual_note": "Alarm clock"},
            {"narration": "Plan the night before.", "visual_note": "Notebook"}
        ],
        "call_to_action": "Follow for more.",
        "theme": "productivity"
    }"#;

    const PLAN_JSON: &str = r#"{
        "scenes": [
            {"description": "Alarm blares", "stock_footage": ["alarm clock"], "editing_tip": "fast cut"},
            {"description": "Notebook plan", "stock_footage": ["notebook"], "editing_tip": "slow zoom"}
        ],
        "music_recommendation": "lo-fi",
        "voiceover_style": "calm"
    }"#;

    /// Fake client that replays a fixed sequence of responses and counts
    /// calls.
    struct ScriptedClient {
        responses: Mutex<VecDeque<AgentResult<String>>>,
        calls: AtomicUsize,
    }

    impl ScriptedClient {
        fn new(responses: Vec<AgentResult<String>>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionClient for ScriptedClient {
        async fn complete(&self, _request: &CompletionRequest) -> AgentResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AgentError::service("no scripted response left")))
        }
    }

    fn request() -> PipelineRequest {
        let date = NaiveDate::from_ymd_opt(2023, 5, 15).unwrap();
        PipelineRequest::new(vec![VideoRecord::new("X", 1_000_000, date)
            .with_description("Y")
            .with_channel("Z")])
    }

    fn orchestrator(client: Arc<ScriptedClient>, continue_on_failure: bool) -> PipelineOrchestrator {
        PipelineOrchestrator::new(client, PipelineConfig { continue_on_failure })
    }

    #[test]
    fn test_state_transitions() {
        let mut state = PipelineState::Start;
        let expected = [
            PipelineState::Analyzed,
            PipelineState::Scripted,
            PipelineState::Planned,
            PipelineState::Done,
            PipelineState::Done,
        ];
        for want in expected {
            state = state.next();
            assert_eq!(state, want);
        }
    }

    #[tokio::test]
    async fn test_run_happy_path() {
        let client = ScriptedClient::new(vec![
            Ok(ANALYSIS_JSON.to_string()),
            Ok(SCRIPT_JSON.to_string()),
            Ok(PLAN_JSON.to_string()),
        ]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let result = orchestrator.run(request()).await.unwrap();

        assert!(result.is_complete());
        assert_eq!(result.stages.analysis, StageStatus::Succeeded);
        assert_eq!(result.stages.script, StageStatus::Succeeded);
        assert_eq!(result.stages.visual_plan, StageStatus::Succeeded);
        assert!(result.error.is_none());

        let script = result.script.as_ref().unwrap();
        assert_eq!(script.platform, Platform::TikTok);
        assert_eq!(script.target_duration_secs, 50);
        assert_eq!(
            result.visual_plan.unwrap().scenes.len(),
            script.sections.len()
        );
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn test_run_empty_videos_validates_before_any_call() {
        let client = ScriptedClient::new(vec![]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let err = orchestrator
            .run(PipelineRequest::new(vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, AgentError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_run_zero_duration_validates_before_any_call() {
        let client = ScriptedClient::new(vec![]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let mut bad = request();
        bad.target_duration = 0;
        let err = orchestrator.run(bad).await.unwrap_err();

        assert!(matches!(err, AgentError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_run_script_failure_continues_with_default() {
        let client = ScriptedClient::new(vec![
            Ok(ANALYSIS_JSON.to_string()),
            Err(AgentError::service("transport error")),
            Ok(r#"{"scenes": [{"description": "only one"}]}"#.to_string()),
        ]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let result = orchestrator.run(request()).await.unwrap();

        assert_eq!(result.stages.analysis, StageStatus::Succeeded);
        assert_eq!(result.stages.script, StageStatus::FailedDefault);
        assert_eq!(result.stages.visual_plan, StageStatus::Succeeded);

        // The planner ran against the substituted fallback script
        let script = result.script.as_ref().unwrap();
        assert_eq!(script, &ScriptRecord::fallback(Platform::TikTok, 50));
        assert_eq!(
            result.visual_plan.unwrap().scenes.len(),
            script.sections.len()
        );
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn test_run_script_failure_halts_without_continue() {
        let client = ScriptedClient::new(vec![
            Ok(ANALYSIS_JSON.to_string()),
            Err(AgentError::service("transport error")),
        ]);
        let orchestrator = orchestrator(Arc::clone(&client), false);

        let result = orchestrator.run(request()).await.unwrap();

        assert_eq!(result.stages.analysis, StageStatus::Succeeded);
        assert_eq!(result.stages.script, StageStatus::Failed);
        assert_eq!(result.stages.visual_plan, StageStatus::Skipped);
        assert!(result.analysis.is_some());
        assert!(result.script.is_none());
        assert!(result.visual_plan.is_none());
        assert!(result.error.is_some());
        assert_eq!(client.calls(), 2);
    }

    #[tokio::test]
    async fn test_run_parse_fallback_is_not_a_failure() {
        let client = ScriptedClient::new(vec![
            Ok("I can't help with that.".to_string()),
            Ok(SCRIPT_JSON.to_string()),
            Ok(PLAN_JSON.to_string()),
        ]);
        let orchestrator = orchestrator(Arc::clone(&client), false);

        let result = orchestrator.run(request()).await.unwrap();

        // Fallback continues even in halt mode
        assert_eq!(result.stages.analysis, StageStatus::Fallback);
        assert_eq!(result.stages.script, StageStatus::Succeeded);
        assert!(result.is_complete());
        assert_eq!(client.calls(), 3);
    }

    #[tokio::test]
    async fn test_analyze_entry_point_validates() {
        let client = ScriptedClient::new(vec![]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let err = orchestrator.analyze(&[], None).await.unwrap_err();
        assert!(matches!(err, AgentError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_write_script_entry_point_validates_duration() {
        let client = ScriptedClient::new(vec![]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let err = orchestrator
            .write_script(&AnalysisRecord::fallback(), &Platform::TikTok, 0)
            .await
            .unwrap_err();
        assert!(matches!(err, AgentError::Validation(_)));
        assert_eq!(client.calls(), 0);
    }

    #[tokio::test]
    async fn test_stage_entry_points_return_status() {
        let client = ScriptedClient::new(vec![Ok(SCRIPT_JSON.to_string())]);
        let orchestrator = orchestrator(Arc::clone(&client), true);

        let (script, status) = orchestrator
            .write_script(&AnalysisRecord::fallback(), &Platform::TikTok, 50)
            .await
            .unwrap();
        assert_eq!(status, StageStatus::Succeeded);
        assert_eq!(script.sections.len(), 2);
    }
}
