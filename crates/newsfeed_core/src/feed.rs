use std::collections::{BTreeSet, HashSet};

use feed_logging::{feed_debug, feed_warn};

use crate::{Article, ArticleDraft, ArticleId, Filter};

/// Number of cards revealed per page of the feed.
pub const PAGE_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub accepted: usize,
    pub skipped: usize,
}

impl std::ops::AddAssign for LoadReport {
    fn add_assign(&mut self, other: Self) {
        self.accepted += other.accepted;
        self.skipped += other.skipped;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkChange {
    Added,
    Removed,
}

/// Article collection plus the active filter, page cursor and bookmarks.
///
/// The filtered view is derived: it is recomputed from `articles` and
/// `filter` whenever either changes and is never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedState {
    articles: Vec<Article>,
    filter: Filter,
    page: usize,
    page_size: usize,
    bookmarks: BTreeSet<ArticleId>,
    /// Indices into `articles`, in insertion order.
    filtered: Vec<usize>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            articles: Vec::new(),
            filter: Filter::None,
            page: 1,
            page_size: page_size.max(1),
            bookmarks: BTreeSet::new(),
            filtered: Vec::new(),
        }
    }

    /// Replaces the article collection. Drafts that fail validation and
    /// repeated ids are skipped; the first occurrence of an id wins.
    pub fn set_articles<I>(&mut self, drafts: I) -> LoadReport
    where
        I: IntoIterator<Item = ArticleDraft>,
    {
        self.articles.clear();
        self.extend_articles(drafts)
    }

    /// Appends drafts after the current articles, with the same skipping
    /// rules as `set_articles`. Ids already loaded count as duplicates.
    pub fn extend_articles<I>(&mut self, drafts: I) -> LoadReport
    where
        I: IntoIterator<Item = ArticleDraft>,
    {
        let mut report = LoadReport::default();
        let mut seen: HashSet<ArticleId> =
            self.articles.iter().map(|article| article.id.clone()).collect();

        for draft in drafts {
            let label = draft.id.clone().unwrap_or_else(|| "<no id>".to_string());
            match Article::try_from(draft) {
                Ok(article) if seen.insert(article.id.clone()) => {
                    self.articles.push(article);
                    report.accepted += 1;
                }
                Ok(article) => {
                    feed_warn!("Skipping duplicate article id {}", article.id);
                    report.skipped += 1;
                }
                Err(err) => {
                    feed_warn!("Skipping article {}: {}", label, err);
                    report.skipped += 1;
                }
            }
        }

        self.recompute();
        report
    }

    pub fn set_category(&mut self, name: &str) {
        self.apply_filter(Filter::category(name));
    }

    pub fn set_search_query(&mut self, query: &str) {
        self.apply_filter(Filter::search(query));
    }

    fn apply_filter(&mut self, filter: Filter) {
        feed_debug!("Filter {:?} -> {:?}", self.filter, filter);
        self.filter = filter;
        self.page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = self
            .articles
            .iter()
            .enumerate()
            .filter(|(_, article)| self.filter.matches(article))
            .map(|(index, _)| index)
            .collect();
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn article(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn filtered_view(&self) -> Vec<&Article> {
        self.filtered.iter().map(|&i| &self.articles[i]).collect()
    }

    /// The first `page * page_size` articles of the filtered view.
    pub fn visible_page(&self) -> Vec<&Article> {
        let shown = self
            .page
            .saturating_mul(self.page_size)
            .min(self.filtered.len());
        self.filtered[..shown]
            .iter()
            .map(|&i| &self.articles[i])
            .collect()
    }

    pub fn has_more(&self) -> bool {
        self.page.saturating_mul(self.page_size) < self.filtered.len()
    }

    /// Reveals one more page. Past the end this only grows the cursor;
    /// the visible page stays the whole filtered view.
    pub fn advance_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Stores `id` regardless of whether it names a loaded article and
    /// returns the article when there is one, for the offline cache.
    pub fn add_bookmark(&mut self, id: &str) -> Option<&Article> {
        self.bookmarks.insert(id.to_owned());
        self.article(id)
    }

    pub fn remove_bookmark(&mut self, id: &str) -> bool {
        self.bookmarks.remove(id)
    }

    pub fn toggle_bookmark(&mut self, id: &str) -> BookmarkChange {
        if self.remove_bookmark(id) {
            BookmarkChange::Removed
        } else {
            self.bookmarks.insert(id.to_owned());
            BookmarkChange::Added
        }
    }

    pub fn is_bookmarked(&self, id: &str) -> bool {
        self.bookmarks.contains(id)
    }

    pub fn bookmark_ids(&self) -> impl Iterator<Item = &str> {
        self.bookmarks.iter().map(String::as_str)
    }

    /// Bookmarked articles in feed order. Ids with no article are omitted.
    pub fn bookmarked_articles(&self) -> Vec<&Article> {
        self.articles
            .iter()
            .filter(|article| self.bookmarks.contains(&article.id))
            .collect()
    }
}
