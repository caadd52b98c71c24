use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed set of news categories. `General` doubles as the unfiltered view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    General,
    Technology,
    Sports,
    Business,
    Health,
    Science,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::General,
        Category::Technology,
        Category::Sports,
        Category::Business,
        Category::Health,
        Category::Science,
        Category::Entertainment,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == slug)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Technology => "technology",
            Category::Sports => "sports",
            Category::Business => "business",
            Category::Health => "health",
            Category::Science => "science",
            Category::Entertainment => "entertainment",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Business => "Business",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Entertainment => "Entertainment",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Category::General => "📰",
            Category::Technology => "💻",
            Category::Sports => "⚽",
            Category::Business => "💼",
            Category::Health => "🏥",
            Category::Science => "🔬",
            Category::Entertainment => "🎬",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::General => "Latest news from all categories",
            Category::Technology => "Tech innovations and digital trends",
            Category::Sports => "Sports news and championship updates",
            Category::Business => "Market trends and business insights",
            Category::Health => "Healthcare and medical breakthroughs",
            Category::Science => "Scientific discoveries and research",
            Category::Entertainment => "Movies, shows, and celebrity news",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip_for_every_category() {
        for category in Category::ALL {
            assert_eq!(Category::from_slug(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_and_differently_cased_slugs_are_rejected() {
        assert_eq!(Category::from_slug("politics"), None);
        assert_eq!(Category::from_slug("Sports"), None);
        assert_eq!(Category::from_slug(""), None);
    }
}
