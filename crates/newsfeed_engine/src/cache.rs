use std::collections::HashMap;

use newsfeed_core::{Article, ArticleId, FeedState};

/// Offline copies of bookmarked articles, keyed by id.
///
/// Not authoritative: entries are added opportunistically and the whole
/// cache can be rebuilt from the feed at any time.
#[derive(Debug, Clone, Default)]
pub struct OfflineCache {
    entries: HashMap<ArticleId, Article>,
}

impl OfflineCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, article: Article) {
        self.entries.insert(article.id.clone(), article);
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replaces the contents with every bookmarked article the feed knows.
    pub fn rebuild(&mut self, feed: &FeedState) {
        self.entries = feed
            .bookmarked_articles()
            .into_iter()
            .map(|article| (article.id.clone(), article.clone()))
            .collect();
    }
}
