use super::directory::Category;

/// Search terms issued to the store for one category scrape.
///
/// The category's descriptive phrase comes first, followed by generic
/// variants built from its readable name. Duplicates are dropped and the
/// first occurrence keeps its position.
pub fn keyword_variants(category: &Category) -> Vec<String> {
    let readable = category.readable_name();
    let candidates = [
        category.search_phrase.to_string(),
        format!("{readable} apps"),
        format!("best {readable} apps"),
        format!("popular {readable} apps"),
        format!("top {readable} android apps"),
        format!("{readable} app download"),
    ];

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !candidate.is_empty() && !variants.contains(&candidate) {
            variants.push(candidate);
        }
    }
    variants
}
