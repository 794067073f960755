//! Heuristic tag derivation from free text.
//!
//! Each of the three dimensions (language, subject, level) has an ordered
//! keyword rule table. Rules are scanned in order and the first keyword
//! found in the case-folded text wins, so more specific keywords must
//! precede generic ones. No rule match falls back to a fixed default.
//! Classification is fully deterministic; filtering depends on it.

use super::types::{Classification, Language, Level, Subject};

/// Default tags for text matching no rule.
pub const DEFAULT_LANGUAGE: Language = Language::English;
pub const DEFAULT_SUBJECT: Subject = Subject::General;
pub const DEFAULT_LEVEL: Level = Level::Intermediate;

/// Language rules. Regional languages come before the generic "english"
/// rule so a bilingual title like "Python in Telugu (English subtitles)"
/// keeps its regional tag.
const LANGUAGE_RULES: &[(&str, Language)] = &[
    ("telugu", Language::Telugu),
    ("hindi", Language::Hindi),
    ("tamil", Language::Tamil),
    ("kannada", Language::Kannada),
    ("malayalam", Language::Malayalam),
    ("bengali", Language::Bengali),
    ("marathi", Language::Marathi),
    ("spanish", Language::Spanish),
    ("español", Language::Spanish),
    ("french", Language::French),
    ("français", Language::French),
    ("german", Language::German),
    ("deutsch", Language::German),
    ("english", Language::English),
];

const SUBJECT_RULES: &[(&str, Subject)] = &[
    ("physics", Subject::Physics),
    ("chemistry", Subject::Chemistry),
    ("biology", Subject::Biology),
    ("botany", Subject::Biology),
    ("zoology", Subject::Biology),
    ("mathematics", Subject::Mathematics),
    ("calculus", Subject::Mathematics),
    ("algebra", Subject::Mathematics),
    ("geometry", Subject::Mathematics),
    ("trigonometry", Subject::Mathematics),
    ("math", Subject::Mathematics),
    ("programming", Subject::Programming),
    ("python", Subject::Programming),
    ("javascript", Subject::Programming),
    ("java", Subject::Programming),
    ("coding", Subject::Programming),
    ("computer science", Subject::Programming),
    ("history", Subject::History),
    ("geography", Subject::Geography),
    ("economics", Subject::Economics),
    ("commerce", Subject::Economics),
];

/// "advance" also covers "advanced"; "intro" covers "introduction".
const LEVEL_RULES: &[(&str, Level)] = &[
    ("advance", Level::Advanced),
    ("expert", Level::Advanced),
    ("masterclass", Level::Advanced),
    ("beginner", Level::Beginner),
    ("basics", Level::Beginner),
    ("basic", Level::Beginner),
    ("intro", Level::Beginner),
    ("for dummies", Level::Beginner),
    ("crash course", Level::Beginner),
    ("intermediate", Level::Intermediate),
];

/// Derive language, subject, and level tags from a text blob.
///
/// Deterministic: identical input always yields identical tags, and every
/// dimension always gets a value.
pub fn classify(text: &str) -> Classification {
    let folded = text.to_lowercase();

    Classification {
        language: first_match(LANGUAGE_RULES, &folded).unwrap_or(DEFAULT_LANGUAGE),
        subject: first_match(SUBJECT_RULES, &folded).unwrap_or(DEFAULT_SUBJECT),
        level: first_match(LEVEL_RULES, &folded).unwrap_or(DEFAULT_LEVEL),
    }
}

fn first_match<T: Copy>(rules: &[(&str, T)], folded: &str) -> Option<T> {
    rules
        .iter()
        .find(|(keyword, _)| folded.contains(keyword))
        .map(|(_, tag)| *tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_defaults_on_empty_text() {
        let tags = classify("");
        assert_eq!(tags.language, DEFAULT_LANGUAGE);
        assert_eq!(tags.subject, DEFAULT_SUBJECT);
        assert_eq!(tags.level, DEFAULT_LEVEL);
    }

    #[test]
    fn test_classify_defaults_on_unmatched_text() {
        let tags = classify("lorem ipsum dolor sit amet");
        assert_eq!(tags.language, Language::English);
        assert_eq!(tags.subject, Subject::General);
        assert_eq!(tags.level, Level::Intermediate);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let text = "Advanced Physics lecture in Hindi";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        let tags = classify("TELUGU Python BASICS");
        assert_eq!(tags.language, Language::Telugu);
        assert_eq!(tags.subject, Subject::Programming);
        assert_eq!(tags.level, Level::Beginner);
    }

    #[test]
    fn test_regional_language_beats_english_mention() {
        let tags = classify("Calculus in Telugu with English subtitles");
        assert_eq!(tags.language, Language::Telugu);
    }

    #[test]
    fn test_classify_dimensions_are_independent() {
        let tags = classify("Organic Chemistry masterclass in Tamil");
        assert_eq!(tags.language, Language::Tamil);
        assert_eq!(tags.subject, Subject::Chemistry);
        assert_eq!(tags.level, Level::Advanced);
    }

    #[test]
    fn test_math_synonyms_share_a_tag() {
        assert_eq!(classify("intro to algebra").subject, Subject::Mathematics);
        assert_eq!(classify("calculus lecture").subject, Subject::Mathematics);
        assert_eq!(classify("math shortcuts").subject, Subject::Mathematics);
    }

    #[test]
    fn test_level_keywords() {
        assert_eq!(classify("introduction to physics").level, Level::Beginner);
        assert_eq!(classify("advanced data structures").level, Level::Advanced);
        assert_eq!(classify("intermediate grammar drills").level, Level::Intermediate);
    }

    #[test]
    fn test_regional_title_classification() {
        assert_eq!(
            classify("Python tutorial in Telugu").language,
            Language::Telugu
        );
        assert_eq!(
            classify("Python tutorial in Hindi").language,
            Language::Hindi
        );
    }
}
