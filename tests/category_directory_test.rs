use playstore_scraper::catalog::{resolve, CategoryDirectory, Resolution};
use playstore_scraper::constants::{GAME_PREFIX, MAX_SUGGESTIONS};

#[test]
fn test_every_key_resolves_to_its_canonical_id() {
    for category in CategoryDirectory::global().all() {
        assert_eq!(
            resolve(category.key).canonical_id(),
            Some(category.canonical_id),
            "key {}",
            category.key
        );
    }
}

#[test]
fn test_case_and_space_variants_resolve_identically() {
    for category in CategoryDirectory::global().all() {
        let expected = resolve(category.key);
        assert_eq!(resolve(&category.key.to_uppercase()), expected);
        assert_eq!(resolve(&category.key.replace('_', " ")), expected);
    }
}

#[test]
fn test_directory_counts() {
    let directory = CategoryDirectory::global();
    assert_eq!(directory.len(), 49);
    assert_eq!(directory.apps().count(), 34);
    assert_eq!(directory.games().count(), 15);
    assert!(directory
        .games()
        .all(|c| c.canonical_id.starts_with(GAME_PREFIX)));
}

#[test]
fn test_unknown_category_gets_capped_suggestions() {
    match resolve("not_a_real_category") {
        Resolution::NotFound(miss) => {
            assert!(!miss.suggestions.is_empty());
            assert!(miss.suggestions.len() <= MAX_SUGGESTIONS);
            assert_eq!(miss.available, 49);
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn test_documented_examples() {
    assert_eq!(resolve("Action").canonical_id(), Some("GAME_ACTION"));
    assert_eq!(resolve("Health Fitness").canonical_id(), Some("HEALTH_AND_FITNESS"));

    let Resolution::NotFound(miss) = resolve("xyz") else {
        panic!("xyz should not resolve");
    };
    assert!(!miss.suggestions.is_empty() && miss.suggestions.len() <= 5);
}

#[test]
fn test_suggestions_keep_directory_order() {
    let Resolution::NotFound(miss) = resolve("sport") else {
        panic!("sport should not resolve");
    };
    assert_eq!(miss.suggestions, vec!["sports", "sports_game"]);
}
