//! Visual production plan models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::script::ScriptRecord;

/// One scene of the production plan, keyed to a script section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SceneRecord {
    /// What happens on screen during this scene
    pub description: String,

    /// Stock-footage search terms for the scene
    pub stock_footage: Vec<String>,

    /// Editing guidance specific to this scene
    pub editing_tip: String,
}

impl SceneRecord {
    pub fn new(
        description: impl Into<String>,
        stock_footage: Vec<String>,
        editing_tip: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            stock_footage,
            editing_tip: editing_tip.into(),
        }
    }

    /// Generic default scene tied to a section's narration, used to pad a
    /// plan whose scene count fell short of the script's section count.
    pub fn establishing_shot(narration: &str) -> Self {
        Self {
            description: format!("Establishing shot while narrating: {narration}"),
            stock_footage: vec![
                "person speaking to camera".to_string(),
                "relevant b-roll footage".to_string(),
            ],
            editing_tip: "Keep the cut under two seconds and let the narration lead.".to_string(),
        }
    }
}

/// Structured result of the visual planning stage.
///
/// Invariant: scene count equals the section count of the script the plan
/// was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VisualPlanRecord {
    /// Ordered scenes, one per script section
    pub scenes: Vec<SceneRecord>,

    /// Background music guidance
    pub music_recommendation: String,

    /// Voiceover delivery guidance
    pub voiceover_style: String,
}

impl VisualPlanRecord {
    /// The deterministic default plan: one establishing shot per script
    /// section.
    pub fn fallback(script: &ScriptRecord) -> Self {
        Self {
            scenes: script
                .sections
                .iter()
                .map(|s| SceneRecord::establishing_shot(&s.narration))
                .collect(),
            music_recommendation: "Upbeat background music".to_string(),
            voiceover_style: "Clear and engaging".to_string(),
        }
    }
}
