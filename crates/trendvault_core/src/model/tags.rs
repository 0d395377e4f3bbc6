//! Tag normalization.
//!
//! # Responsibility
//! - Turn raw tag input into the canonical stored representation.
//! - Parse comma-separated tag field input from editors.
//!
//! # Invariants
//! - Output is trimmed, non-empty, lower-cased, deduplicated and sorted.
//! - `normalize_tags(normalize_tags(x)) == normalize_tags(x)`.

use std::collections::BTreeSet;

/// Normalizes one tag value.
///
/// Returns `None` when the value is blank after trim.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let trimmed = tag.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes, deduplicates and sorts tag values.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut unique = BTreeSet::new();
    for tag in tags {
        if let Some(value) = normalize_tag(tag.as_ref()) {
            unique.insert(value);
        }
    }
    unique.into_iter().collect()
}

/// Parses a comma-separated tag field, e.g. `"Ads, UI ,"`.
pub fn parse_tag_input(text: &str) -> Vec<String> {
    let parts: Vec<&str> = text.split(',').collect();
    normalize_tags(&parts)
}
