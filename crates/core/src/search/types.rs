//! Types for the video search system.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query parameters for a video search.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search term. May be empty; the query builder substitutes
    /// a default seed term instead of erroring.
    #[serde(default)]
    pub term: String,
    /// Optional: restrict results to one subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<Subject>,
    /// Optional: restrict results to one language.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// Optional: restrict results to one skill level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<Level>,
}

/// Content language tag derived from free text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Hindi,
    Telugu,
    Tamil,
    Kannada,
    Malayalam,
    Bengali,
    Marathi,
    Spanish,
    French,
    German,
}

impl Language {
    /// Lowercase label, also used as an upstream query term.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Telugu => "telugu",
            Language::Tamil => "tamil",
            Language::Kannada => "kannada",
            Language::Malayalam => "malayalam",
            Language::Bengali => "bengali",
            Language::Marathi => "marathi",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject area tag derived from free text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    Programming,
    History,
    Geography,
    Economics,
    General,
}

impl Subject {
    /// Lowercase label, also used as an upstream query term.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "mathematics",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Programming => "programming",
            Subject::History => "history",
            Subject::Geography => "geography",
            Subject::Economics => "economics",
            Subject::General => "general",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Skill level tag derived from free text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three tags the classifier derives for every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub language: Language,
    pub subject: Subject,
    pub level: Level,
}

/// Raw result item from the upstream provider (before classification).
#[derive(Debug, Clone, PartialEq)]
pub struct RawVideoItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub channel: String,
    pub watch_url: String,
    pub published_at: Option<DateTime<Utc>>,
}

/// A classified video result, the canonical unit returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VideoRecord {
    /// Upstream identifier or synthetic fallback id; unique within one
    /// result set.
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    /// Display string; `"N/A"` when the lightweight search endpoint omits
    /// the duration.
    pub duration_label: String,
    /// Display string; `"N/A"` when the provider omits view counts.
    pub views_label: String,
    /// Display rating. The provider supplies no rating; this is derived
    /// deterministically from the record id.
    pub rating_estimate: f32,
    pub language: Language,
    pub subject: Subject,
    pub level: Level,
    pub source_url: String,
    pub channel_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
    pub has_subtitles: bool,
    pub has_notes: bool,
}

impl VideoRecord {
    /// Assemble a record from a raw upstream item and its classification.
    ///
    /// The lightweight search endpoint does not return durations, view
    /// counts, or ratings; the display fields are filled with `"N/A"` and
    /// an id-derived rating so repeated searches render identical values.
    pub fn from_raw(raw: RawVideoItem, tags: Classification) -> Self {
        let hash = fnv1a(&raw.id);
        Self {
            rating_estimate: derived_rating(hash),
            has_subtitles: hash & 0x1 == 0,
            has_notes: hash & 0x2 == 0,
            duration_label: "N/A".to_string(),
            views_label: "N/A".to_string(),
            id: raw.id,
            title: raw.title,
            description: raw.description,
            thumbnail_url: raw.thumbnail_url,
            language: tags.language,
            subject: tags.subject,
            level: tags.level,
            source_url: raw.watch_url,
            channel_label: raw.channel,
            published_at: raw.published_at,
        }
    }
}

/// Map a record-id hash into a plausible 3.5..=5.0 display rating.
fn derived_rating(hash: u64) -> f32 {
    3.5 + (hash % 16) as f32 / 10.0
}

/// FNV-1a over the record id. Stable across runs, unlike `DefaultHasher`.
fn fnv1a(text: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in text.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Whether a search outcome was served live or from the curated catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    Live,
    Fallback,
}

/// Search result with metadata. The only object returned across the
/// component boundary; raw provider errors never escape through it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub records: Vec<VideoRecord>,
    pub total_count: usize,
    pub source: ResultSource,
    /// Human-readable note for non-blocking display (demo mode, fallback
    /// cause). Never a raw provider error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

/// Errors a video source can produce. Closed taxonomy: every transport or
/// provider failure crosses this boundary as one of the four kinds below.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// Credential rejected (401/403). Retrying cannot fix this.
    #[error("Upstream rejected the API credential: {0}")]
    Unauthenticated(String),

    /// Quota exhausted (429). Retryable with backoff.
    #[error("Upstream rate limit exceeded")]
    RateLimited,

    /// Network fault or 5xx-class response.
    #[error("Upstream request failed: {0}")]
    Transient(String),

    /// Valid response with no matching items.
    #[error("Upstream returned no results")]
    Empty,
}

/// Trait for video search providers.
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Issue one search request. No retries, no cooldown knowledge; the
    /// retry controller owns both.
    async fn fetch(&self, search_term: &str) -> Result<Vec<RawVideoItem>, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: &str) -> RawVideoItem {
        RawVideoItem {
            id: id.to_string(),
            title: "Algebra Basics".to_string(),
            description: "Introductory algebra".to_string(),
            thumbnail_url: "https://img.example/mq.jpg".to_string(),
            channel: "Study Channel".to_string(),
            watch_url: format!("https://www.youtube.com/watch?v={}", id),
            published_at: None,
        }
    }

    fn tags() -> Classification {
        Classification {
            language: Language::English,
            subject: Subject::Mathematics,
            level: Level::Beginner,
        }
    }

    #[test]
    fn test_search_request_serialization() {
        let request = SearchRequest {
            term: "python tutorial".to_string(),
            subject: Some(Subject::Programming),
            language: Some(Language::Telugu),
            level: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"programming\""));
        assert!(json.contains("\"telugu\""));
        assert!(!json.contains("level"));

        let parsed: SearchRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.term, "python tutorial");
        assert_eq!(parsed.subject, Some(Subject::Programming));
    }

    #[test]
    fn test_search_request_minimal() {
        let parsed: SearchRequest = serde_json::from_str(r#"{"term": "physics"}"#).unwrap();
        assert_eq!(parsed.term, "physics");
        assert!(parsed.subject.is_none());
        assert!(parsed.language.is_none());
        assert!(parsed.level.is_none());
    }

    #[test]
    fn test_tag_serialization() {
        assert_eq!(
            serde_json::to_string(&Language::Telugu).unwrap(),
            "\"telugu\""
        );
        assert_eq!(
            serde_json::to_string(&Subject::Mathematics).unwrap(),
            "\"mathematics\""
        );
        assert_eq!(serde_json::to_string(&Level::Advanced).unwrap(), "\"advanced\"");
        assert_eq!(
            serde_json::to_string(&ResultSource::Fallback).unwrap(),
            "\"fallback\""
        );
    }

    #[test]
    fn test_record_from_raw_fills_display_fields() {
        let record = VideoRecord::from_raw(raw("abc123"), tags());

        assert_eq!(record.id, "abc123");
        assert_eq!(record.duration_label, "N/A");
        assert_eq!(record.views_label, "N/A");
        assert_eq!(record.language, Language::English);
        assert_eq!(record.subject, Subject::Mathematics);
        assert_eq!(record.level, Level::Beginner);
        assert!(record.source_url.contains("abc123"));
    }

    #[test]
    fn test_record_rating_is_deterministic_and_plausible() {
        let first = VideoRecord::from_raw(raw("abc123"), tags());
        let second = VideoRecord::from_raw(raw("abc123"), tags());

        assert_eq!(first.rating_estimate, second.rating_estimate);
        assert_eq!(first.has_subtitles, second.has_subtitles);
        assert_eq!(first.has_notes, second.has_notes);
        assert!(first.rating_estimate >= 3.5);
        assert!(first.rating_estimate <= 5.0);
    }

    #[test]
    fn test_record_rating_varies_across_ids() {
        let ratings: std::collections::HashSet<String> = ["a", "b", "c", "d", "e", "f"]
            .iter()
            .map(|id| format!("{:.1}", VideoRecord::from_raw(raw(id), tags()).rating_estimate))
            .collect();

        // Not all six ids should collapse onto one display value.
        assert!(ratings.len() > 1);
    }

    #[test]
    fn test_outcome_serialization_skips_empty_diagnostic() {
        let outcome = SearchOutcome {
            records: vec![],
            total_count: 0,
            source: ResultSource::Live,
            diagnostic: None,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        assert!(!json.contains("diagnostic"));
        assert!(json.contains("\"live\""));
    }

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Unauthenticated("HTTP 403".to_string());
        assert_eq!(
            err.to_string(),
            "Upstream rejected the API credential: HTTP 403"
        );
        assert_eq!(FetchError::Empty.to_string(), "Upstream returned no results");
    }
}
