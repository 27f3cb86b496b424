use once_cell::sync::Lazy;
use regex::Regex;

use super::directory::{Category, CategoryDirectory};
use crate::constants::MAX_SUGGESTIONS;
use crate::error::{Result, ScraperError};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Outcome of resolving a user-supplied category name.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved(&'static Category),
    NotFound(NotFound),
}

/// A category miss with ranked suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    /// Input exactly as supplied.
    pub input: String,
    pub normalized: String,
    /// Up to `MAX_SUGGESTIONS` keys, in directory order.
    pub suggestions: Vec<&'static str>,
    /// Total number of categories in the directory.
    pub available: usize,
}

impl Resolution {
    pub fn canonical_id(&self) -> Option<&'static str> {
        match self {
            Resolution::Resolved(category) => Some(category.canonical_id),
            Resolution::NotFound(_) => None,
        }
    }

    /// Turn a miss into `ScraperError::CategoryNotFound`.
    pub fn into_result(self) -> Result<&'static Category> {
        match self {
            Resolution::Resolved(category) => Ok(category),
            Resolution::NotFound(miss) => Err(ScraperError::CategoryNotFound(miss)),
        }
    }
}

/// Lower-case the input and collapse whitespace runs into a single `_`.
pub fn normalize(raw: &str) -> String {
    WHITESPACE_RUN
        .replace_all(raw.trim(), "_")
        .to_lowercase()
}

/// Resolve `raw` against the global directory.
pub fn resolve(raw: &str) -> Resolution {
    let directory = CategoryDirectory::global();
    let normalized = normalize(raw);

    if let Some(category) = directory.get(&normalized) {
        return Resolution::Resolved(category);
    }

    // Fall back to the store's own code (`game_action`, `Health and Fitness`).
    if let Some(category) = directory.get_by_canonical(&normalized.to_uppercase()) {
        return Resolution::Resolved(category);
    }

    Resolution::NotFound(NotFound {
        input: raw.to_string(),
        suggestions: suggest(directory, &normalized),
        normalized,
        available: directory.len(),
    })
}

/// Keys containing the first three characters of `normalized` or starting
/// with its first two, capped at `MAX_SUGGESTIONS`. Never empty: a miss with
/// no similar keys falls back to the head of the directory.
fn suggest(directory: &'static CategoryDirectory, normalized: &str) -> Vec<&'static str> {
    let head3: String = normalized.chars().take(3).collect();
    let head2: String = normalized.chars().take(2).collect();

    let similar: Vec<&'static str> = directory
        .keys()
        .filter(|key| key.contains(head3.as_str()) || key.starts_with(head2.as_str()))
        .take(MAX_SUGGESTIONS)
        .collect();

    if similar.is_empty() {
        directory.keys().take(MAX_SUGGESTIONS).collect()
    } else {
        similar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize("Health Fitness"), "health_fitness");
        assert_eq!(normalize("  Role \t  Playing "), "role_playing");
        assert_eq!(normalize("ACTION"), "action");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn resolves_game_key() {
        assert_eq!(resolve("Action").canonical_id(), Some("GAME_ACTION"));
    }

    #[test]
    fn resolves_through_canonical_fallback() {
        assert_eq!(resolve("Health Fitness").canonical_id(), Some("HEALTH_AND_FITNESS"));
        assert_eq!(resolve("health and fitness").canonical_id(), Some("HEALTH_AND_FITNESS"));
        assert_eq!(resolve("game_action").canonical_id(), Some("GAME_ACTION"));
        assert_eq!(resolve("VIDEO_PLAYERS").canonical_id(), Some("VIDEO_PLAYERS"));
    }

    #[test]
    fn miss_uses_prefix_heuristic() {
        let Resolution::NotFound(miss) = resolve("puzzles and more") else {
            panic!("expected a miss");
        };
        assert_eq!(miss.normalized, "puzzles_and_more");
        assert_eq!(miss.suggestions, vec!["puzzle"]);
        assert_eq!(miss.available, 49);
    }

    #[test]
    fn miss_without_similar_keys_falls_back_to_directory_head() {
        let Resolution::NotFound(miss) = resolve("xyz") else {
            panic!("expected a miss");
        };
        assert_eq!(
            miss.suggestions,
            vec!["art_design", "auto", "beauty", "books", "business"]
        );
    }

    #[test]
    fn suggestions_are_capped() {
        // "s" matches every key containing "s", far more than the cap.
        let Resolution::NotFound(miss) = resolve("s") else {
            panic!("expected a miss");
        };
        assert_eq!(miss.suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn into_result_carries_the_miss() {
        let err = resolve("nope").into_result().unwrap_err();
        match err {
            ScraperError::CategoryNotFound(miss) => assert_eq!(miss.input, "nope"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
