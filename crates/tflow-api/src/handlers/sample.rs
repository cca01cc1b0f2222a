//! Sample payload handler.

use axum::Json;
use serde_json::{json, Value};

/// Returns sample request payloads for every endpoint.
pub async fn sample() -> Json<Value> {
    let videos = sample_videos();

    Json(json!({
        "analyze_endpoint": {
            "videos": videos,
            "target_niche": "Productivity"
        },
        "generate_script_endpoint": {
            "analysis": {
                "hook_patterns": [
                    {"type": "shock-based", "example": "You're doing this wrong, and here's why."},
                    {"type": "question-based", "example": "What if one habit could change your life?"}
                ],
                "format_trends": [
                    "Hook → Insight → Visual Demo → CTA",
                    "Fast-paced cuts with meme overlays and subtitles"
                ],
                "engagement_tactics": [
                    "Open loops (e.g., 'Wait for it...')",
                    "Direct CTAs ('Follow me for more')"
                ],
                "content_themes": [
                    "Time management hacks",
                    "Exposing common myths"
                ],
                "summary": "Viral videos lead with a curiosity hook, cut fast, and close with a direct CTA."
            },
            "platform": "TikTok",
            "target_duration": 50
        },
        "create_visual_plan_endpoint": {
            "script": {
                "title": "You won't believe this transformation.",
                "hook": "They said this kitchen was a lost cause.",
                "sections": [
                    {
                        "narration": "But $3,000 and 6 weekends later? It's now our favorite room.",
                        "visual_note": "Before/after sweep of the kitchen"
                    }
                ],
                "call_to_action": "Follow for more budget renovation ideas.",
                "theme": "home renovation",
                "platform": "TikTok",
                "target_duration_secs": 50
            }
        },
        "full_pipeline_endpoint": {
            "videos": videos,
            "platform": "TikTok",
            "target_duration": 50,
            "target_niche": "Productivity"
        }
    }))
}

/// Sample viral videos, including enriched niche data.
pub fn sample_videos() -> Value {
    json!([
        {
            "title": "5 Morning Habits That Changed My Life",
            "description": "I tried these 5 morning habits for 30 days and here's what happened...",
            "views": 1_500_000u64,
            "publishedAt": "2023-05-15",
            "channel": "ProductivityGuru",
            "problem": "Lack of productivity and energy in the morning",
            "audience": "Young professionals and students",
            "solution": "Simple morning routine habits that increase productivity",
            "niche": "Productivity",
            "sub_niche": "Morning routines",
            "pain_points": "Feeling tired, unproductive, and overwhelmed",
            "value_proposition": "Boost energy and productivity with simple morning habits"
        },
        {
            "title": "You've Been Charging Your Phone Wrong",
            "description": "This simple trick will make your battery last twice as long!",
            "views": 2_300_000u64,
            "publishedAt": "2023-06-02",
            "channel": "TechHacks",
            "problem": "Phone battery dies too quickly",
            "audience": "Smartphone users of all ages",
            "solution": "Proper charging techniques to extend battery life",
            "niche": "Technology",
            "sub_niche": "Smartphone tips",
            "pain_points": "Frustration with short battery life, always needing a charger",
            "value_proposition": "Double your battery life with this simple change"
        },
        {
            "title": "What I Eat in a Day as a Nutritionist",
            "description": "Healthy meal ideas that take less than 10 minutes to prepare",
            "views": 950_000u64,
            "publishedAt": "2023-05-28",
            "channel": "HealthyEating"
        }
    ])
}
