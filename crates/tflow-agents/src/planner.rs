//! Visual planner agent: script to shot-by-shot production plan.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use tflow_models::{Platform, SceneRecord, ScriptRecord, VisualPlanRecord};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::outcome::Outcome;
use crate::parser::parse_or_fallback;
use crate::prompts::{build_visual_plan_prompt, PLANNER_SYSTEM_PROMPT};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1200;

/// Wire shape of the model's visual plan response.
#[derive(Debug, Deserialize)]
struct PlanWire {
    scenes: Vec<SceneWire>,
    #[serde(default = "default_music")]
    music_recommendation: String,
    #[serde(default = "default_voiceover")]
    voiceover_style: String,
}

#[derive(Debug, Deserialize)]
struct SceneWire {
    description: String,
    #[serde(default)]
    stock_footage: Vec<String>,
    #[serde(default = "default_editing_tip")]
    editing_tip: String,
}

fn default_music() -> String {
    "Upbeat background music".to_string()
}

fn default_voiceover() -> String {
    "Clear and engaging".to_string()
}

fn default_editing_tip() -> String {
    "Keep the pacing fast with cuts every 1-2 seconds".to_string()
}

/// Agent for creating visual production plans for short-form videos.
pub struct VisualContentPlannerAgent {
    client: Arc<dyn CompletionClient>,
}

impl VisualContentPlannerAgent {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Create a production plan for a script.
    ///
    /// The returned plan always has exactly one scene per script section:
    /// extra scenes from the model are truncated, missing ones are padded
    /// with an establishing shot tied to the section's narration.
    pub async fn plan(&self, script: &ScriptRecord, platform: &Platform) -> Outcome<VisualPlanRecord> {
        let request = CompletionRequest {
            system_prompt: PLANNER_SYSTEM_PROMPT.to_string(),
            user_prompt: build_visual_plan_prompt(script, platform),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let raw = match self.client.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Visual planning completion call failed");
                return Outcome::Failure(e);
            }
        };

        let parsed = parse_or_fallback::<PlanWire, _>(&raw, || fallback_wire(script));
        let fell_back = parsed.fell_back;
        let wire = parsed.record;

        let scenes = wire
            .scenes
            .into_iter()
            .map(|s| {
                let stock_footage = if s.stock_footage.is_empty() {
                    vec!["relevant b-roll footage".to_string()]
                } else {
                    s.stock_footage
                };
                SceneRecord::new(s.description, stock_footage, s.editing_tip)
            })
            .collect();

        let record = VisualPlanRecord {
            scenes: reconcile_scenes(scenes, script),
            music_recommendation: wire.music_recommendation,
            voiceover_style: wire.voiceover_style,
        };

        if fell_back {
            warn!("Visual plan response fell back to the default plan");
            Outcome::Fallback(record)
        } else {
            info!(scenes = record.scenes.len(), "Visual plan generated from model output");
            Outcome::Success(record)
        }
    }
}

/// Force the scene list to line up one-to-one with the script's sections.
fn reconcile_scenes(mut scenes: Vec<SceneRecord>, script: &ScriptRecord) -> Vec<SceneRecord> {
    let wanted = script.sections.len();

    if scenes.len() > wanted {
        warn!(
            got = scenes.len(),
            wanted,
            "Model returned extra scenes; truncating"
        );
        scenes.truncate(wanted);
    } else if scenes.len() < wanted {
        warn!(
            got = scenes.len(),
            wanted,
            "Model returned too few scenes; padding with establishing shots"
        );
        for section in &script.sections[scenes.len()..] {
            scenes.push(SceneRecord::establishing_shot(&section.narration));
        }
    }

    scenes
}

/// Deterministic default wire record, mirroring [`VisualPlanRecord::fallback`].
fn fallback_wire(script: &ScriptRecord) -> PlanWire {
    let fallback = VisualPlanRecord::fallback(script);
    PlanWire {
        scenes: fallback
            .scenes
            .into_iter()
            .map(|s| SceneWire {
                description: s.description,
                stock_footage: s.stock_footage,
                editing_tip: s.editing_tip,
            })
            .collect(),
        music_recommendation: fallback.music_recommendation,
        voiceover_style: fallback.voiceover_style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completion::MockCompletionClient;
    use crate::error::AgentError;

    fn script() -> ScriptRecord {
        // Fallback script: two sections
        ScriptRecord::fallback(Platform::TikTok, 50)
    }

    fn agent_with(raw: impl Into<String>) -> VisualContentPlannerAgent {
        let raw = raw.into();
        let mut mock = MockCompletionClient::new();
        mock.expect_complete().returning(move |_| Ok(raw.clone()));
        VisualContentPlannerAgent::new(Arc::new(mock))
    }

    fn scene_json(description: &str) -> String {
        format!(
            r#"{{"description": "{description}", "stock_footage": ["desk shot"], "editing_tip": "tight cut"}}"#
        )
    }

    #[tokio::test]
    async fn test_plan_matching_scene_count() {
        let body = format!(
            r#"{{"scenes": [{}, {}], "music_recommendation": "lo-fi", "voiceover_style": "calm"}}"#,
            scene_json("scene one"),
            scene_json("scene two"),
        );
        let agent = agent_with(body);

        let outcome = agent.plan(&script(), &Platform::TikTok).await;
        assert!(outcome.is_success());
        let plan = outcome.record().unwrap();
        assert_eq!(plan.scenes.len(), script().sections.len());
        assert_eq!(plan.music_recommendation, "lo-fi");
    }

    #[tokio::test]
    async fn test_plan_truncates_extra_scenes() {
        let body = format!(
            r#"{{"scenes": [{}, {}, {}, {}]}}"#,
            scene_json("one"),
            scene_json("two"),
            scene_json("three"),
            scene_json("four"),
        );
        let agent = agent_with(body);

        let plan = agent
            .plan(&script(), &Platform::TikTok)
            .await
            .record()
            .unwrap();
        assert_eq!(plan.scenes.len(), 2);
        assert_eq!(plan.scenes[1].description, "two");
    }

    #[tokio::test]
    async fn test_plan_pads_missing_scenes_with_establishing_shots() {
        let body = format!(r#"{{"scenes": [{}]}}"#, scene_json("only one"));
        let agent = agent_with(body);

        let target = script();
        let plan = agent.plan(&target, &Platform::TikTok).await.record().unwrap();

        assert_eq!(plan.scenes.len(), target.sections.len());
        let padded = &plan.scenes[1];
        assert!(padded.description.starts_with("Establishing shot"));
        assert!(padded.description.contains(&target.sections[1].narration));
    }

    #[tokio::test]
    async fn test_plan_fills_empty_stock_footage() {
        let body = r#"{"scenes": [{"description": "d1"}, {"description": "d2"}]}"#;
        let agent = agent_with(body);

        let plan = agent
            .plan(&script(), &Platform::TikTok)
            .await
            .record()
            .unwrap();
        assert!(!plan.scenes[0].stock_footage.is_empty());
    }

    #[tokio::test]
    async fn test_plan_garbage_falls_back_to_one_scene_per_section() {
        let agent = agent_with("nothing structured");
        let target = script();

        let outcome = agent.plan(&target, &Platform::TikTok).await;
        assert!(outcome.fell_back());
        let plan = outcome.record().unwrap();
        assert_eq!(plan.scenes.len(), target.sections.len());
        assert_eq!(plan, VisualPlanRecord::fallback(&target));
    }

    #[tokio::test]
    async fn test_plan_service_error_is_failure() {
        let mut mock = MockCompletionClient::new();
        mock.expect_complete()
            .returning(|_| Err(AgentError::service("dns failure")));
        let agent = VisualContentPlannerAgent::new(Arc::new(mock));

        let outcome = agent.plan(&script(), &Platform::TikTok).await;
        assert!(outcome.is_failure());
    }

    #[test]
    fn test_reconcile_noop_when_counts_match() {
        let target = script();
        let scenes = vec![
            SceneRecord::new("a", vec!["x".to_string()], "tip"),
            SceneRecord::new("b", vec!["y".to_string()], "tip"),
        ];
        let reconciled = reconcile_scenes(scenes.clone(), &target);
        assert_eq!(reconciled, scenes);
    }
}
