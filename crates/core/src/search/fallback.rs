//! Curated fallback catalog.
//!
//! A fixed, pre-classified result set returned whenever live search is
//! unusable (no credential, or the retry controller gave up). Records are
//! tagged at construction so the classifier never runs over them, and the
//! set deliberately spans several languages, subjects, and levels so facet
//! filters still have something to bite on.

use super::types::{Language, Level, Subject, VideoRecord};

/// Static catalog of curated study videos.
pub struct FallbackCatalog;

impl FallbackCatalog {
    /// All curated records, in display order.
    pub fn all() -> Vec<VideoRecord> {
        vec![
            curated(
                "fallback-001",
                "Algebra Basics: Solving Linear Equations",
                "Step-by-step introduction to linear equations and variable isolation.",
                "Khan Academy",
                "12:45",
                "2.1M views",
                4.7,
                Language::English,
                Subject::Mathematics,
                Level::Beginner,
            ),
            curated(
                "fallback-002",
                "Laws of Motion Explained in Hindi",
                "Newton's three laws with everyday examples, taught in Hindi.",
                "Physics Wallah",
                "18:20",
                "3.4M views",
                4.8,
                Language::Hindi,
                Subject::Physics,
                Level::Beginner,
            ),
            curated(
                "fallback-003",
                "Python Programming Full Course in Telugu",
                "Variables, loops, functions, and a small project, taught in Telugu.",
                "Telugu TechBrains",
                "1:42:10",
                "890K views",
                4.6,
                Language::Telugu,
                Subject::Programming,
                Level::Beginner,
            ),
            curated(
                "fallback-004",
                "Organic Chemistry: Reaction Mechanisms",
                "Nucleophilic substitution and elimination mechanisms with practice problems.",
                "ChemSimplified",
                "24:05",
                "640K views",
                4.5,
                Language::English,
                Subject::Chemistry,
                Level::Intermediate,
            ),
            curated(
                "fallback-005",
                "Advanced Calculus: Multivariable Limits",
                "Epsilon-delta proofs and limit evaluation along paths.",
                "MIT OpenCourseWare",
                "49:30",
                "1.1M views",
                4.9,
                Language::English,
                Subject::Mathematics,
                Level::Advanced,
            ),
            curated(
                "fallback-006",
                "Cell Structure and Function",
                "Organelles, membranes, and transport for first-year biology.",
                "Amoeba Sisters",
                "9:58",
                "5.2M views",
                4.8,
                Language::English,
                Subject::Biology,
                Level::Beginner,
            ),
            curated(
                "fallback-007",
                "Microeconomics Basics in Tamil",
                "Demand, supply, and market equilibrium explained in Tamil.",
                "Tamil EduWorld",
                "21:40",
                "310K views",
                4.4,
                Language::Tamil,
                Subject::Economics,
                Level::Intermediate,
            ),
            curated(
                "fallback-008",
                "World History: The Industrial Revolution",
                "Causes, key inventions, and social consequences, 1760-1840.",
                "CrashCourse",
                "14:11",
                "4.0M views",
                4.7,
                Language::English,
                Subject::History,
                Level::Intermediate,
            ),
            curated(
                "fallback-009",
                "Advanced Data Structures Masterclass",
                "Segment trees, tries, and disjoint sets with complexity analysis.",
                "freeCodeCamp",
                "2:15:00",
                "1.8M views",
                4.8,
                Language::English,
                Subject::Programming,
                Level::Advanced,
            ),
            curated(
                "fallback-010",
                "Geography: Monsoons and Climate Patterns in Kannada",
                "How monsoon systems form and shape the subcontinent, in Kannada.",
                "Kannada Kali",
                "16:33",
                "220K views",
                4.3,
                Language::Kannada,
                Subject::Geography,
                Level::Intermediate,
            ),
        ]
    }
}

#[allow(clippy::too_many_arguments)]
fn curated(
    id: &str,
    title: &str,
    description: &str,
    channel: &str,
    duration: &str,
    views: &str,
    rating: f32,
    language: Language,
    subject: Subject,
    level: Level,
) -> VideoRecord {
    VideoRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        thumbnail_url: format!("https://cdn.eduseek.app/thumbs/{}.jpg", id),
        duration_label: duration.to_string(),
        views_label: views.to_string(),
        rating_estimate: rating,
        language,
        subject,
        level,
        source_url: format!("https://www.youtube.com/results?search_query={}", id),
        channel_label: channel.to_string(),
        published_at: None,
        has_subtitles: true,
        has_notes: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_not_empty() {
        assert!(!FallbackCatalog::all().is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let records = FallbackCatalog::all();
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_catalog_spans_multiple_dimensions() {
        let records = FallbackCatalog::all();

        let languages: HashSet<Language> = records.iter().map(|r| r.language).collect();
        let subjects: HashSet<Subject> = records.iter().map(|r| r.subject).collect();
        let levels: HashSet<Level> = records.iter().map(|r| r.level).collect();

        assert!(languages.len() >= 3);
        assert!(subjects.len() >= 4);
        assert_eq!(levels.len(), 3);
    }

    #[test]
    fn test_catalog_records_have_display_fields() {
        for record in FallbackCatalog::all() {
            assert!(!record.title.is_empty());
            assert!(!record.duration_label.is_empty());
            assert!(!record.views_label.is_empty());
            assert!(record.rating_estimate >= 1.0 && record.rating_estimate <= 5.0);
        }
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        assert_eq!(FallbackCatalog::all(), FallbackCatalog::all());
    }
}
