//! Prompt construction for the three agents.

use tflow_models::{AnalysisRecord, Platform, ScriptRecord, VideoRecord};

pub const STRATEGIST_SYSTEM_PROMPT: &str =
    "You are an expert content strategist specializing in viral short-form video analysis.";

pub const SCRIPTWRITER_SYSTEM_PROMPT: &str =
    "You are an expert social media content creator specializing in viral short-form videos.";

pub const PLANNER_SYSTEM_PROMPT: &str =
    "You are an expert video producer specializing in short-form video content creation.";

/// Serialize one video for prompt embedding, with explicit sentinels for
/// absent fields.
fn format_video(video: &VideoRecord) -> String {
    let mut lines = format!(
        "Title: {}\nDescription: {}\nViews: {}\nChannel: {}\nPublished: {}",
        video.title,
        video.description.as_deref().unwrap_or("N/A"),
        video.views,
        video.channel.as_deref().unwrap_or("Unknown"),
        video.published_at,
    );

    if let Some(niche) = &video.niche {
        lines.push_str(&format!("\nNiche: {niche}"));
    }
    if let Some(sub_niche) = &video.sub_niche {
        lines.push_str(&format!("\nSub-niche: {sub_niche}"));
    }
    if let Some(problem) = &video.problem {
        lines.push_str(&format!("\nProblem: {problem}"));
    }
    if let Some(audience) = &video.audience {
        lines.push_str(&format!("\nAudience: {audience}"));
    }
    if let Some(value) = &video.value_proposition {
        lines.push_str(&format!("\nValue proposition: {value}"));
    }

    lines
}

fn format_videos(videos: &[&VideoRecord]) -> String {
    videos
        .iter()
        .map(|v| format_video(v))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the analysis prompt. Niche-matched videos, when present, go into a
/// priority section the model is told to weight.
pub fn build_analysis_prompt(
    matched: &[&VideoRecord],
    rest: &[&VideoRecord],
    target_niche: Option<&str>,
) -> String {
    let mut prompt = String::from(
        "Analyze these viral short-form videos and extract the structural patterns \
         behind their performance.\n\n",
    );

    if !matched.is_empty() {
        let target = target_niche.unwrap_or_default();
        prompt.push_str(&format!(
            "PRIORITY VIDEOS (matching the target niche \"{target}\"; weight these heavily):\n\n"
        ));
        prompt.push_str(&format_videos(matched));
        if !rest.is_empty() {
            prompt.push_str("\n\nADDITIONAL VIDEOS (supporting context):\n\n");
            prompt.push_str(&format_videos(rest));
        }
    } else {
        prompt.push_str(&format_videos(rest));
    }

    prompt.push_str(
        r#"

Identify:
- 3-5 hook patterns, each with a descriptive name (e.g. "question-based", "shock-based", "number-based") and a concrete example from the videos
- 4-6 format trends: structure patterns, editing styles, visual techniques, pacing
- 4-6 engagement tactics: CTAs, audience interaction, curiosity gaps, open loops
- 4-6 content themes: subject matter, value propositions, emotional appeals

Focus on actionable insights that could be used to create similar content.

IMPORTANT: You must strictly follow this output format.
Return ONLY a single JSON object with this schema:
{
  "hook_patterns": [
    {"type": "hook type", "example": "example from the videos"}
  ],
  "format_trends": ["Trend 1", "Trend 2"],
  "engagement_tactics": ["Tactic 1", "Tactic 2"],
  "content_themes": ["Theme 1", "Theme 2"],
  "summary": "Concise, action-oriented summary (3-5 sentences)"
}"#,
    );

    prompt
}

/// Build the scriptwriting prompt from an analysis record.
pub fn build_script_prompt(
    analysis: &AnalysisRecord,
    platform: &Platform,
    target_duration_secs: u32,
) -> String {
    let hook_patterns = analysis
        .hook_patterns
        .iter()
        .map(|h| format!("- {}: {}", h.kind, h.example))
        .collect::<Vec<_>>()
        .join("\n");

    let bullets = |items: &[String]| {
        items
            .iter()
            .map(|i| format!("- {i}"))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let mut prompt = format!(
        r#"Write a viral short-form video script for {platform}, targeting roughly {target_duration_secs} seconds of fast-paced delivery.

Base it on this analysis of currently viral videos:

HOOK PATTERNS:
{hook_patterns}

FORMAT TRENDS:
{format_trends}

ENGAGEMENT TACTICS:
{engagement_tactics}

CONTENT THEMES:
{content_themes}

SUMMARY: {summary}
"#,
        platform = platform,
        format_trends = bullets(&analysis.format_trends),
        engagement_tactics = bullets(&analysis.engagement_tactics),
        content_themes = bullets(&analysis.content_themes),
        summary = analysis.summary,
    );

    if let Some(insights) = &analysis.niche_insights {
        if !insights.is_empty() {
            prompt.push_str("\nNICHE INSIGHTS (speak directly to these):\n");
            if !insights.pain_points.is_empty() {
                prompt.push_str(&format!("Pain points: {}\n", insights.pain_points.join("; ")));
            }
            if !insights.audiences.is_empty() {
                prompt.push_str(&format!("Audiences: {}\n", insights.audiences.join("; ")));
            }
            if !insights.value_propositions.is_empty() {
                prompt.push_str(&format!(
                    "Value propositions: {}\n",
                    insights.value_propositions.join("; ")
                ));
            }
        }
    }

    prompt.push_str(
        r#"
The script must:
1. Open with a hook that grabs attention in the first 3 seconds
2. Identify a relatable problem, then deliver a concrete solution or insight
3. Describe the accompanying visuals for every section
4. Close with a platform-appropriate call-to-action
5. Use conversational, engaging language

IMPORTANT: You must strictly follow this output format.
Return ONLY a single JSON object with this schema:
{
  "title": "Short caption headline (max 60 chars)",
  "hook": "Opening hook line",
  "sections": [
    {"narration": "What is said", "visual_note": "What is shown"}
  ],
  "call_to_action": "Closing CTA line",
  "theme": "Primary theme of the script"
}"#,
    );

    prompt
}

/// Build the visual planning prompt from a script record. The scene count is
/// pinned to the script's section count.
pub fn build_visual_plan_prompt(script: &ScriptRecord, platform: &Platform) -> String {
    let sections = script
        .sections
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "Section {n}:\nNarration: {narration}\nVisual note: {note}",
                n = i + 1,
                narration = s.narration,
                note = s.visual_note,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    format!(
        r#"Create a detailed visual production plan for a {platform} short-form video.

HOOK: {hook}
CTA: {cta}
THEME: {theme}

SCRIPT SECTIONS:
{sections}

Produce exactly {count} scenes, one per script section and in the same order. For each scene provide:
- A description of what happens on screen
- 2-3 stock-footage search terms
- One editing tip specific to the scene and {platform}

Also recommend a music style and a voiceover style for the whole video.

IMPORTANT: You must strictly follow this output format.
Return ONLY a single JSON object with this schema:
{{
  "scenes": [
    {{
      "description": "What happens on screen",
      "stock_footage": ["search term 1", "search term 2"],
      "editing_tip": "Editing guidance for this scene"
    }}
  ],
  "music_recommendation": "Music style",
  "voiceover_style": "Voice guidance"
}}"#,
        platform = platform,
        hook = script.hook,
        cta = script.call_to_action,
        theme = script.theme.as_deref().unwrap_or("general"),
        sections = sections,
        count = script.sections.len(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn video(title: &str) -> VideoRecord {
        VideoRecord::new(title, 1_000_000, NaiveDate::from_ymd_opt(2023, 5, 15).unwrap())
            .with_description("desc")
            .with_channel("chan")
    }

    #[test]
    fn test_analysis_prompt_embeds_videos_and_schema() {
        let a = video("5 Morning Habits");
        let b = video("Phone Charging Trick");
        let prompt = build_analysis_prompt(&[], &[&a, &b], None);

        assert!(prompt.contains("5 Morning Habits"));
        assert!(prompt.contains("Phone Charging Trick"));
        assert!(prompt.contains("hook_patterns"));
        assert!(!prompt.contains("PRIORITY VIDEOS"));
    }

    #[test]
    fn test_analysis_prompt_priority_section() {
        let a = video("Matched");
        let b = video("Rest");
        let prompt = build_analysis_prompt(&[&a], &[&b], Some("productivity"));

        assert!(prompt.contains("PRIORITY VIDEOS"));
        assert!(prompt.contains("productivity"));
        let priority_pos = prompt.find("Matched").unwrap();
        let rest_pos = prompt.find("Rest").unwrap();
        assert!(priority_pos < rest_pos);
    }

    #[test]
    fn test_video_sentinels_for_absent_fields() {
        let bare = VideoRecord::new("t", 5, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        let formatted = format_video(&bare);
        assert!(formatted.contains("Description: N/A"));
        assert!(formatted.contains("Channel: Unknown"));
    }

    #[test]
    fn test_script_prompt_carries_platform_and_duration() {
        let analysis = AnalysisRecord::fallback();
        let prompt = build_script_prompt(&analysis, &Platform::from("Snapchat"), 45);
        assert!(prompt.contains("Snapchat"));
        assert!(prompt.contains("45 seconds"));
        assert!(prompt.contains("call_to_action"));
    }

    #[test]
    fn test_visual_plan_prompt_pins_scene_count() {
        let script = ScriptRecord::fallback(Platform::TikTok, 50);
        let prompt = build_visual_plan_prompt(&script, &Platform::TikTok);
        assert!(prompt.contains(&format!("exactly {} scenes", script.sections.len())));
        assert!(prompt.contains("stock_footage"));
    }
}
