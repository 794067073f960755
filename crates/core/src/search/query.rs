//! Upstream search term composition.
//!
//! Pure string assembly: free text plus optional subject/language facets.
//! Never fails and never produces an empty term.

use super::types::{Language, Subject};

/// Seed term used when the caller submits an empty search box.
pub const DEFAULT_TERM: &str = "study tutorial";

/// Compose the upstream search term as `term [subject] [language]`.
///
/// An empty or whitespace-only `term` is replaced by [`DEFAULT_TERM`]
/// rather than rejected. The level facet is intentionally not sent
/// upstream; it is only applied as a client-side filter.
pub fn build(term: &str, subject: Option<Subject>, language: Option<Language>) -> String {
    let trimmed = term.trim();
    let base = if trimmed.is_empty() { DEFAULT_TERM } else { trimmed };

    let mut parts = vec![base];
    if let Some(subject) = subject {
        parts.push(subject.as_str());
    }
    if let Some(language) = language {
        parts.push(language.as_str());
    }

    parts.join(" ")
}
