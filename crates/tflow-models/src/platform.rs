//! Target platform for generated content.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Short-form video platform a script or plan targets.
///
/// Parsing is deliberately permissive: the recognized platforms normalize
/// from their common aliases, and anything else is preserved verbatim so the
/// free-text value still reaches the model prompt unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    TikTok,
    Instagram,
    YouTube,
    Other(String),
}

impl Platform {
    /// Canonical display name, or the verbatim value for `Other`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TikTok => "TikTok",
            Self::Instagram => "Instagram",
            Self::YouTube => "YouTube",
            Self::Other(name) => name,
        }
    }

    /// True for one of the recognized platforms.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::TikTok
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tiktok" => Self::TikTok,
            "instagram" | "instagram_reels" | "reels" => Self::Instagram,
            "youtube" | "youtube_shorts" | "shorts" => Self::YouTube,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for Platform {
    fn schema_name() -> String {
        "Platform".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        String::json_schema(gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Platform::from("tiktok"), Platform::TikTok);
        assert_eq!(Platform::from("Instagram_Reels"), Platform::Instagram);
        assert_eq!(Platform::from("youtube_shorts"), Platform::YouTube);
        assert_eq!(Platform::from("shorts"), Platform::YouTube);
    }

    #[test]
    fn test_unrecognized_preserved_verbatim() {
        let platform = Platform::from("Snapchat Spotlight");
        assert_eq!(platform, Platform::Other("Snapchat Spotlight".to_string()));
        assert_eq!(platform.as_str(), "Snapchat Spotlight");
        assert!(!platform.is_recognized());
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Platform::from("tiktok")).unwrap();
        assert_eq!(json, "\"TikTok\"");

        let other: Platform = serde_json::from_str("\"Snapchat\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"Snapchat\"");
    }

    #[test]
    fn test_default_is_tiktok() {
        assert_eq!(Platform::default(), Platform::TikTok);
    }
}
