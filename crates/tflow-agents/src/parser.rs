//! Response parser.
//!
//! Models wrap JSON in prose and markdown code fences more often than not.
//! This module locates the JSON-shaped substring, decodes it strictly
//! against the expected schema, and substitutes a deterministic default when
//! decoding fails. Pure functions throughout: parsing the same text twice
//! yields identical results.

use serde::de::DeserializeOwned;

/// A decoded record plus whether the schema default was substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    pub record: T,
    pub fell_back: bool,
}

/// Locate the JSON object or array inside `raw`, stripping markdown code
/// fences and surrounding prose.
pub fn extract_json(raw: &str) -> Option<&str> {
    let text = strip_code_fences(raw.trim());

    let start = text.find(['{', '['])?;
    let close = if text.as_bytes()[start] == b'{' { '}' } else { ']' };
    let end = text.rfind(close)?;

    (end > start).then(|| &text[start..=end])
}

/// Strict decode of `raw` into `T`, or the deterministic default when no
/// decodable JSON matching the schema is present. Never an error, and never
/// a field-by-field partial merge.
pub fn parse_or_fallback<T, F>(raw: &str, fallback: F) -> Parsed<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match extract_json(raw).and_then(|json| serde_json::from_str::<T>(json).ok()) {
        Some(record) => Parsed {
            record,
            fell_back: false,
        },
        None => Parsed {
            record: fallback(),
            fell_back: true,
        },
    }
}

/// Strip a leading ```/```json fence line and a trailing ``` fence.
fn strip_code_fences(text: &str) -> &str {
    let text = match text.strip_prefix("```") {
        Some(rest) => rest.split_once('\n').map(|(_, body)| body).unwrap_or(rest),
        None => text,
    };
    text.strip_suffix("```").unwrap_or(text).trim()
}
