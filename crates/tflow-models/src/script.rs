//! Generated script models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::platform::Platform;

/// Narration words per second for fast-paced short-form delivery.
const WORDS_PER_SECOND: f64 = 2.5;

/// One section of a script: what is said and what is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptSection {
    /// Spoken narration for this section
    pub narration: String,

    /// Production note describing the accompanying visuals
    pub visual_note: String,
}

impl ScriptSection {
    pub fn new(narration: impl Into<String>, visual_note: impl Into<String>) -> Self {
        Self {
            narration: narration.into(),
            visual_note: visual_note.into(),
        }
    }
}

/// Structured result of the scriptwriting stage.
///
/// Invariant: `sections` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptRecord {
    /// Short title, suitable as a caption headline
    pub title: String,

    /// Opening hook (first 3 seconds)
    pub hook: String,

    /// Ordered body sections
    pub sections: Vec<ScriptSection>,

    /// Closing call-to-action
    pub call_to_action: String,

    /// Primary theme the script runs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// Platform the script targets
    #[serde(default)]
    pub platform: Platform,

    /// Advisory duration target in seconds
    pub target_duration_secs: u32,
}

impl ScriptRecord {
    /// The deterministic default substituted when scriptwriting cannot use
    /// model output. Two sections, so downstream planning has structure to
    /// key scenes off.
    pub fn fallback(platform: Platform, target_duration_secs: u32) -> Self {
        let hook = "We all have too much to do and too little time.";
        Self {
            title: truncate_title(hook),
            hook: hook.to_string(),
            sections: vec![
                ScriptSection::new(
                    "Most days disappear into small tasks that never move the needle, \
                     and the to-do list only grows.",
                    "Overwhelmed person staring at a long checklist",
                ),
                ScriptSection::new(
                    "Try the 1-3-5 rule: commit to one big thing, three medium things, \
                     and five small things each day. That's it.",
                    "Notebook page with the 1-3-5 list being written out",
                ),
            ],
            call_to_action: "Follow for more productivity tips that actually work.".to_string(),
            theme: Some("productivity".to_string()),
            platform,
            target_duration_secs,
        }
    }

    /// Hook, section narrations, and CTA joined into the spoken script.
    pub fn full_text(&self) -> String {
        let mut parts = vec![self.hook.clone()];
        parts.extend(self.sections.iter().map(|s| s.narration.clone()));
        parts.push(self.call_to_action.clone());
        parts.join("\n\n")
    }

    /// Estimated spoken duration at fast-paced delivery, clamped to the
    /// 15-60 second short-form window.
    pub fn estimated_duration_secs(&self) -> u32 {
        let words = self.full_text().split_whitespace().count();
        ((words as f64 / WORDS_PER_SECOND) as u32).clamp(15, 60)
    }
}

/// Truncate a hook into a title of at most 60 characters.
pub fn truncate_title(hook: &str) -> String {
    if hook.chars().count() <= 60 {
        hook.to_string()
    } else {
        let mut title: String = hook.chars().take(57).collect();
        title.push_str("...");
        title
    }
}
