//! Content strategy agent: viral pattern extraction from video metadata.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use tflow_models::{AnalysisRecord, HookPattern, NicheInsights, NicheScope, VideoRecord};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::outcome::Outcome;
use crate::parser::parse_or_fallback;
use crate::prompts::{build_analysis_prompt, STRATEGIST_SYSTEM_PROMPT};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 900;

/// Wire shape of the model's analysis response.
#[derive(Debug, Deserialize)]
struct AnalysisWire {
    hook_patterns: Vec<HookPattern>,
    format_trends: Vec<String>,
    engagement_tactics: Vec<String>,
    content_themes: Vec<String>,
    #[serde(default)]
    summary: String,
}

impl AnalysisWire {
    /// A decoded response missing any of the core pattern lists is as
    /// useless downstream as an undecodable one.
    fn is_vacuous(&self) -> bool {
        self.hook_patterns.is_empty()
            || self.format_trends.is_empty()
            || self.content_themes.is_empty()
    }
}

/// Agent for analyzing viral short-form video content.
pub struct ContentStrategyAgent {
    client: Arc<dyn CompletionClient>,
}

impl ContentStrategyAgent {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Analyze a batch of videos, optionally scoped to a target niche.
    ///
    /// Niche matching is case-insensitive against each video's niche and
    /// sub-niche. A target that matches nothing widens back to the full set
    /// and notes the mismatch in the result instead of failing. No upper
    /// bound is enforced on the batch size here; request sizing is the
    /// caller's token budget.
    pub async fn analyze(
        &self,
        videos: &[VideoRecord],
        target_niche: Option<&str>,
    ) -> Outcome<AnalysisRecord> {
        let (matched, rest): (Vec<&VideoRecord>, Vec<&VideoRecord>) = match target_niche {
            Some(target) => videos.iter().partition(|v| v.matches_niche(target)),
            None => (Vec::new(), videos.iter().collect()),
        };

        let scope = target_niche.map(|target| {
            let mut scope = NicheScope {
                target: target.to_string(),
                matched_videos: matched.len(),
                note: None,
            };
            if matched.is_empty() {
                scope.note = Some(format!(
                    "No videos matched niche \"{target}\"; analyzed the full set instead"
                ));
                warn!(target_niche = %target, "Target niche matched no videos");
            }
            scope
        });

        let insight_set: &[&VideoRecord] = if matched.is_empty() { &rest } else { &matched };
        let insights = NicheInsights::from_videos(insight_set.iter().copied());

        let request = CompletionRequest {
            system_prompt: STRATEGIST_SYSTEM_PROMPT.to_string(),
            user_prompt: build_analysis_prompt(&matched, &rest, target_niche),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let raw = match self.client.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Strategy completion call failed");
                return Outcome::Failure(e);
            }
        };

        let parsed = parse_or_fallback::<AnalysisWire, _>(&raw, fallback_wire);
        let (wire, fell_back) = if !parsed.fell_back && parsed.record.is_vacuous() {
            (fallback_wire(), true)
        } else {
            (parsed.record, parsed.fell_back)
        };

        let mut record = AnalysisRecord {
            hook_patterns: wire.hook_patterns,
            format_trends: wire.format_trends,
            engagement_tactics: wire.engagement_tactics,
            content_themes: wire.content_themes,
            summary: wire.summary,
            niche: scope,
            niche_insights: None,
        };
        if !insights.is_empty() {
            record = record.with_insights(insights);
        }

        if fell_back {
            warn!("Strategy response fell back to the default analysis");
            Outcome::Fallback(record)
        } else {
            info!(
                hook_patterns = record.hook_patterns.len(),
                themes = record.content_themes.len(),
                "Analysis completed from model output"
            );
            Outcome::Success(record)
        }
    }
}

/// Deterministic default wire record, mirroring [`AnalysisRecord::fallback`].
fn fallback_wire() -> AnalysisWire {
    let fallback = AnalysisRecord::fallback();
    AnalysisWire {
        hook_patterns: fallback.hook_patterns,
        format_trends: fallback.format_trends,
        engagement_tactics: fallback.engagement_tactics,
        content_themes: fallback.content_themes,
        summary: fallback.summary,
    }
}
