//! Content analysis models.
//!
//! The analysis stage distills a batch of viral videos into the structural
//! patterns a scriptwriter can work from: hook patterns, format trends,
//! engagement tactics, and content themes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::video::VideoRecord;

/// A named hook pattern with a concrete example drawn from the input videos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HookPattern {
    /// Pattern name (e.g. "question-based", "shock-based", "number-based")
    #[serde(rename = "type")]
    pub kind: String,

    /// Concrete example of the pattern
    pub example: String,
}

impl HookPattern {
    pub fn new(kind: impl Into<String>, example: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            example: example.into(),
        }
    }
}

/// How a target-niche filter applied to the analyzed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NicheScope {
    /// The niche the caller asked to scope the analysis to
    pub target: String,

    /// Number of input videos whose niche/sub-niche matched
    pub matched_videos: usize,

    /// Set when the target matched nothing and the full set was analyzed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Deduplicated enrichment data aggregated across the analyzed videos.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NicheInsights {
    pub problems: Vec<String>,
    pub audiences: Vec<String>,
    pub solutions: Vec<String>,
    pub niches: Vec<String>,
    pub sub_niches: Vec<String>,
    pub pain_points: Vec<String>,
    pub value_propositions: Vec<String>,
}

impl NicheInsights {
    /// Aggregate the enrichment fields of `videos`, deduplicated and sorted.
    pub fn from_videos<'a, I>(videos: I) -> Self
    where
        I: IntoIterator<Item = &'a VideoRecord> + Clone,
    {
        fn dedup<'a>(values: impl Iterator<Item = Option<&'a String>>) -> Vec<String> {
            values
                .flatten()
                .cloned()
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        }

        Self {
            problems: dedup(videos.clone().into_iter().map(|v| v.problem.as_ref())),
            audiences: dedup(videos.clone().into_iter().map(|v| v.audience.as_ref())),
            solutions: dedup(videos.clone().into_iter().map(|v| v.solution.as_ref())),
            niches: dedup(videos.clone().into_iter().map(|v| v.niche.as_ref())),
            sub_niches: dedup(videos.clone().into_iter().map(|v| v.sub_niche.as_ref())),
            pain_points: dedup(videos.clone().into_iter().map(|v| v.pain_points.as_ref())),
            value_propositions: dedup(videos.into_iter().map(|v| v.value_proposition.as_ref())),
        }
    }

    /// True when no enrichment data was present at all.
    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
            && self.audiences.is_empty()
            && self.solutions.is_empty()
            && self.niches.is_empty()
            && self.sub_niches.is_empty()
            && self.pain_points.is_empty()
            && self.value_propositions.is_empty()
    }
}

/// Structured result of the content analysis stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisRecord {
    /// Hook patterns observed across the videos
    pub hook_patterns: Vec<HookPattern>,

    /// Structural/editing format trends
    pub format_trends: Vec<String>,

    /// Tactics the videos use to drive engagement
    pub engagement_tactics: Vec<String>,

    /// Recurring content themes
    pub content_themes: Vec<String>,

    /// Action-oriented synthesis of the above
    pub summary: String,

    /// Present when the caller scoped the analysis to a niche
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<NicheScope>,

    /// Aggregated enrichment data, when the input videos carried any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche_insights: Option<NicheInsights>,
}

impl AnalysisRecord {
    /// The deterministic default substituted when the model response cannot
    /// be decoded. Every sequence is non-empty so downstream prompts always
    /// have material to work from.
    pub fn fallback() -> Self {
        Self {
            hook_patterns: vec![
                HookPattern::new(
                    "question-based",
                    "What if one simple change could save you hours every week?",
                ),
                HookPattern::new("shock-based", "You've been doing this wrong the whole time."),
                HookPattern::new("number-based", "3 habits that changed everything for me."),
            ],
            format_trends: vec![
                "Hook (0-3s) → Problem (3-8s) → Solution (8-20s) → CTA (last 5s)".to_string(),
                "Fast-paced editing with text overlays and background music".to_string(),
                "List-based delivery with a step-by-step payoff".to_string(),
            ],
            engagement_tactics: vec![
                "Open loops that hold attention until the payoff".to_string(),
                "Direct questions to viewers to encourage comments".to_string(),
                "Explicit calls-to-action (follow, like, comment)".to_string(),
            ],
            content_themes: vec![
                "Life hacks and everyday problem-solving".to_string(),
                "Personal productivity and habit formation".to_string(),
            ],
            summary: "Successful short-form videos lead with a curiosity or pain-point hook, \
                      move quickly from problem to payoff with fast cuts and on-screen text, \
                      and close with a direct call-to-action."
                .to_string(),
            niche: None,
            niche_insights: None,
        }
    }

    /// Attach niche scope metadata.
    pub fn with_niche(mut self, niche: NicheScope) -> Self {
        self.niche = Some(niche);
        self
    }

    /// Attach aggregated niche insights.
    pub fn with_insights(mut self, insights: NicheInsights) -> Self {
        self.niche_insights = Some(insights);
        self
    }
}
