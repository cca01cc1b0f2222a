//! Scriptwriter agent: analysis record to short-form video script.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};

use tflow_models::script::truncate_title;
use tflow_models::{AnalysisRecord, Platform, ScriptRecord, ScriptSection};

use crate::completion::{CompletionClient, CompletionRequest};
use crate::outcome::Outcome;
use crate::parser::parse_or_fallback;
use crate::prompts::{build_script_prompt, SCRIPTWRITER_SYSTEM_PROMPT};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 800;

/// Wire shape of the model's script response.
#[derive(Debug, Deserialize)]
struct ScriptWire {
    #[serde(default)]
    title: String,
    hook: String,
    sections: Vec<SectionWire>,
    call_to_action: String,
    #[serde(default)]
    theme: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SectionWire {
    narration: String,
    #[serde(default = "default_visual_note")]
    visual_note: String,
}

fn default_visual_note() -> String {
    "Creator speaking to camera".to_string()
}

/// Agent for generating optimized short-form video scripts.
pub struct ContentScriptwriterAgent {
    client: Arc<dyn CompletionClient>,
}

impl ContentScriptwriterAgent {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generate a script from an analysis record.
    ///
    /// The platform passes through verbatim, recognized or not; the duration
    /// is an advisory prompt parameter whose positivity is enforced at the
    /// orchestration boundary. The returned script always has at least one
    /// section.
    pub async fn write(
        &self,
        analysis: &AnalysisRecord,
        platform: &Platform,
        target_duration_secs: u32,
    ) -> Outcome<ScriptRecord> {
        let request = CompletionRequest {
            system_prompt: SCRIPTWRITER_SYSTEM_PROMPT.to_string(),
            user_prompt: build_script_prompt(analysis, platform, target_duration_secs),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let raw = match self.client.complete(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Scriptwriting completion call failed");
                return Outcome::Failure(e);
            }
        };

        let parsed = parse_or_fallback::<ScriptWire, _>(&raw, || {
            fallback_wire(platform.clone(), target_duration_secs)
        });
        let (wire, fell_back) = if !parsed.fell_back && parsed.record.sections.is_empty() {
            (fallback_wire(platform.clone(), target_duration_secs), true)
        } else {
            (parsed.record, parsed.fell_back)
        };

        let title = if wire.title.is_empty() {
            truncate_title(&wire.hook)
        } else {
            truncate_title(&wire.title)
        };

        let record = ScriptRecord {
            title,
            hook: wire.hook,
            sections: wire
                .sections
                .into_iter()
                .map(|s| ScriptSection::new(s.narration, s.visual_note))
                .collect(),
            call_to_action: wire.call_to_action,
            theme: wire.theme,
            platform: platform.clone(),
            target_duration_secs,
        };

        if fell_back {
            warn!("Script response fell back to the default script");
            Outcome::Fallback(record)
        } else {
            info!(
                sections = record.sections.len(),
                estimated_secs = record.estimated_duration_secs(),
                "Script generated from model output"
            );
            Outcome::Success(record)
        }
    }
}

/// Deterministic default wire record, mirroring [`ScriptRecord::fallback`].
fn fallback_wire(platform: Platform, target_duration_secs: u32) -> ScriptWire {
    let fallback = ScriptRecord::fallback(platform, target_duration_secs);
    ScriptWire {
        title: fallback.title,
        hook: fallback.hook,
        sections: fallback
            .sections
            .into_iter()
            .map(|s| SectionWire {
                narration: s.narration,
                visual_note: s.visual_note,
            })
            .collect(),
        call_to_action: fallback.call_to_action,
        theme: fallback.theme,
    }
}
