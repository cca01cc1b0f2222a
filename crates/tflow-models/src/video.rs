//! Viral video metadata models.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Metadata for a single viral video supplied at pipeline entry.
///
/// The base fields come straight from the video platform; the optional
/// enrichment fields carry niche research attached by upstream tooling.
/// Records are immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VideoRecord {
    /// Video title
    pub title: String,

    /// Video description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// View count
    pub views: u64,

    /// Publish date
    #[serde(rename = "publishedAt")]
    pub published_at: NaiveDate,

    /// Channel name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,

    /// Problem the video addresses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,

    /// Audience the video targets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// Solution the video presents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,

    /// Content niche (e.g. "Productivity")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub niche: Option<String>,

    /// Sub-niche within the niche (e.g. "Morning routines")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_niche: Option<String>,

    /// Pain points called out in the video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pain_points: Option<String>,

    /// Value proposition of the video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_proposition: Option<String>,
}

impl VideoRecord {
    /// Create a record with only the base platform fields set.
    pub fn new(
        title: impl Into<String>,
        views: u64,
        published_at: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            views,
            published_at,
            channel: None,
            problem: None,
            audience: None,
            solution: None,
            niche: None,
            sub_niche: None,
            pain_points: None,
            value_proposition: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the channel name.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set the niche and sub-niche.
    pub fn with_niche(mut self, niche: impl Into<String>, sub_niche: Option<String>) -> Self {
        self.niche = Some(niche.into());
        self.sub_niche = sub_niche;
        self
    }

    /// True when any enrichment field is present.
    pub fn is_enriched(&self) -> bool {
        self.problem.is_some()
            || self.audience.is_some()
            || self.solution.is_some()
            || self.niche.is_some()
            || self.sub_niche.is_some()
            || self.pain_points.is_some()
            || self.value_proposition.is_some()
    }

    /// Case-insensitive substring match of `target` against the video's
    /// niche or sub-niche.
    pub fn matches_niche(&self, target: &str) -> bool {
        let target = target.to_lowercase();
        let hit = |field: &Option<String>| {
            field
                .as_deref()
                .map(|v| v.to_lowercase().contains(&target))
                .unwrap_or(false)
        };
        hit(&self.niche) || hit(&self.sub_niche)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_matches_niche_case_insensitive() {
        let video = VideoRecord::new("5 Morning Habits", 1_500_000, date("2023-05-15"))
            .with_niche("Productivity", Some("Morning routines".to_string()));

        assert!(video.matches_niche("productivity"));
        assert!(video.matches_niche("MORNING"));
        assert!(!video.matches_niche("fitness"));
    }

    #[test]
    fn test_matches_niche_without_enrichment() {
        let video = VideoRecord::new("Phone trick", 2_300_000, date("2023-06-02"));
        assert!(!video.is_enriched());
        assert!(!video.matches_niche("tech"));
    }

    #[test]
    fn test_deserialize_base_shape() {
        let json = r#"{
            "title": "X",
            "description": "Y",
            "views": 1000000,
            "publishedAt": "2023-05-15",
            "channel": "Z"
        }"#;

        let video: VideoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(video.title, "X");
        assert_eq!(video.views, 1_000_000);
        assert_eq!(video.published_at, date("2023-05-15"));
        assert!(!video.is_enriched());
    }
}
