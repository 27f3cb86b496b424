use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::constants::GAME_PREFIX;

/// A single Play Store category known to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Lowercase snake_case key accepted by the API.
    pub key: &'static str,
    /// The store's own category code, e.g. `GAME_ACTION`.
    pub canonical_id: &'static str,
    /// Descriptive phrase used as the first search keyword.
    pub search_phrase: &'static str,
}

impl Category {
    pub fn is_game(&self) -> bool {
        self.canonical_id.starts_with(GAME_PREFIX)
    }

    /// Key rendered for humans and search terms (`role_playing` -> `role playing`).
    pub fn readable_name(&self) -> String {
        self.key.replace('_', " ")
    }
}

// App categories, in directory order.
const APP_CATEGORIES: &[(&str, &str, &str)] = &[
    ("art_design", "ART_AND_DESIGN", "art and design drawing apps"),
    ("auto", "AUTO_AND_VEHICLES", "car maintenance and auto care apps"),
    ("beauty", "BEAUTY", "beauty tutorials and makeup apps"),
    ("books", "BOOKS_AND_REFERENCE", "ebook reader and book apps"),
    ("business", "BUSINESS", "small business productivity apps"),
    ("comics", "COMICS", "digital comics reader apps"),
    ("communication", "COMMUNICATION", "messaging and calling apps"),
    ("dating", "DATING", "online dating and matchmaking apps"),
    ("education", "EDUCATION", "education learning apps"),
    ("entertainment", "ENTERTAINMENT", "entertainment streaming apps"),
    ("events", "EVENTS", "event tickets and planner apps"),
    ("finance", "FINANCE", "personal finance budgeting apps"),
    ("food", "FOOD_AND_DRINK", "food delivery and recipe apps"),
    ("health", "HEALTH_AND_FITNESS", "health and fitness workout apps"),
    ("house", "HOUSE_AND_HOME", "home design and real estate apps"),
    ("libraries", "LIBRARIES_AND_DEMO", "demo and libraries developer apps"),
    ("lifestyle", "LIFESTYLE", "lifestyle inspiration apps"),
    ("maps", "MAPS_AND_NAVIGATION", "maps and navigation gps apps"),
    ("medical", "MEDICAL", "medical reference apps"),
    ("music", "MUSIC_AND_AUDIO", "music streaming apps"),
    ("news", "NEWS_AND_MAGAZINES", "news and magazines apps"),
    ("parenting", "PARENTING", "parenting baby tracker apps"),
    ("personalization", "PERSONALIZATION", "android launcher personalization apps"),
    ("photography", "PHOTOGRAPHY", "photo editor camera apps"),
    ("productivity", "PRODUCTIVITY", "productivity task manager apps"),
    ("shopping", "SHOPPING", "shopping deals apps"),
    ("social", "SOCIAL", "social media community apps"),
    ("sports", "SPORTS", "sports scores apps"),
    ("tools", "TOOLS", "android utility tools apps"),
    ("travel", "TRAVEL_AND_LOCAL", "travel planning and booking apps"),
    ("video", "VIDEO_PLAYERS", "video streaming and player apps"),
    ("weather", "WEATHER", "weather forecast apps"),
    ("android_wear", "ANDROID_WEAR", "wear os smartwatch apps"),
    ("work", "WORK_PROFILE", "work profile enterprise apps"),
];

const GAME_CATEGORIES: &[(&str, &str, &str)] = &[
    ("action", "GAME_ACTION", "action games android"),
    ("adventure", "GAME_ADVENTURE", "adventure games android"),
    ("arcade", "GAME_ARCADE", "arcade games android"),
    ("board", "GAME_BOARD", "board games android"),
    ("card", "GAME_CARD", "card games android"),
    ("casual", "GAME_CASUAL", "casual games android"),
    ("educational_game", "GAME_EDUCATIONAL", "educational games for kids"),
    ("music_game", "GAME_MUSIC", "music rhythm games android"),
    ("puzzle", "GAME_PUZZLE", "puzzle games android"),
    ("racing", "GAME_RACING", "racing games android"),
    ("role_playing", "GAME_ROLE_PLAYING", "role playing rpg games android"),
    ("simulation", "GAME_SIMULATION", "simulation games android"),
    ("sports_game", "GAME_SPORTS", "sports games android"),
    ("strategy", "GAME_STRATEGY", "strategy games android"),
    ("trivia", "GAME_TRIVIA", "trivia quiz games android"),
];

/// Immutable key -> category table, built once on first use.
pub struct CategoryDirectory {
    entries: Vec<Category>,
    by_key: HashMap<&'static str, usize>,
    by_canonical: HashMap<String, usize>,
}

static DIRECTORY: Lazy<CategoryDirectory> = Lazy::new(|| {
    CategoryDirectory::build(APP_CATEGORIES.iter().chain(GAME_CATEGORIES.iter()))
});

impl CategoryDirectory {
    /// The process-wide directory.
    pub fn global() -> &'static CategoryDirectory {
        &DIRECTORY
    }

    fn build<'a, I>(rows: I) -> Self
    where
        I: Iterator<Item = &'a (&'static str, &'static str, &'static str)>,
    {
        let mut entries = Vec::new();
        let mut by_key = HashMap::new();
        let mut by_canonical = HashMap::new();

        for &(key, canonical_id, search_phrase) in rows {
            let idx = entries.len();
            entries.push(Category {
                key,
                canonical_id,
                search_phrase,
            });
            by_key.insert(key, idx);
            // Both `HEALTH_AND_FITNESS` and `HEALTH_FITNESS` point at the entry.
            by_canonical.entry(canonical_id.to_string()).or_insert(idx);
            by_canonical
                .entry(canonical_id.replace("_AND_", "_"))
                .or_insert(idx);
        }

        Self {
            entries,
            by_key,
            by_canonical,
        }
    }

    pub fn all(&self) -> &[Category] {
        &self.entries
    }

    pub fn apps(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().filter(|c| !c.is_game())
    }

    pub fn games(&self) -> impl Iterator<Item = &Category> {
        self.entries.iter().filter(|c| c.is_game())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact key lookup, no normalization.
    pub fn get(&self, key: &str) -> Option<&Category> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    /// Lookup by canonical id, accepting the `_AND_`-collapsed form.
    pub fn get_by_canonical(&self, canonical: &str) -> Option<&Category> {
        self.by_canonical.get(canonical).map(|&idx| &self.entries[idx])
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|c| c.key)
    }
}
