use std::time::Duration;

use crate::view_model::{
    AppViewModel, ArticleDetailView, CardView, CarouselView, FeedHeader, SearchSummary, SlideView,
};
use crate::{Article, ArticleId, Carousel, Category, FeedState, Filter};

/// Interval between automatic carousel advances.
pub const DEFAULT_AUTOPLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Everything the single control flow owns: the feed, the carousel and
/// the small amount of UI state the render step needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub(crate) feed: FeedState,
    pub(crate) carousel: Carousel,
    pub(crate) autoplay_interval: Duration,
    pub(crate) dark_mode: bool,
    pub(crate) bookmarks_open: bool,
    pub(crate) open_article: Option<ArticleId>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            feed: FeedState::new(),
            carousel: Carousel::default(),
            autoplay_interval: DEFAULT_AUTOPLAY_INTERVAL,
            dark_mode: false,
            bookmarks_open: false,
            open_article: None,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autoplay_interval(interval: Duration) -> Self {
        Self {
            autoplay_interval: interval,
            ..Self::default()
        }
    }

    pub fn with_feed(feed: FeedState) -> Self {
        Self {
            feed,
            ..Self::default()
        }
    }

    pub fn feed(&self) -> &FeedState {
        &self.feed
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn autoplay_interval(&self) -> Duration {
        self.autoplay_interval
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn view(&self) -> AppViewModel {
        let card =
            |article: &Article| CardView::new(article, self.feed.is_bookmarked(&article.id));

        let carousel = (!self.carousel.is_empty()).then(|| CarouselView {
            index: self.carousel.index(),
            slides: self.carousel.slides().iter().map(SlideView::new).collect(),
            at_start: self.carousel.is_at_start(),
            at_end: self.carousel.is_at_end(),
            autoplay: self.carousel.is_autoplay_active(),
        });

        let bookmarks = self.bookmarks_open.then(|| {
            self.feed
                .bookmarked_articles()
                .into_iter()
                .map(|article| CardView::new(article, true))
                .collect()
        });

        let open_article = self
            .open_article
            .as_deref()
            .and_then(|id| self.feed.article(id))
            .map(|article| ArticleDetailView::new(article, self.feed.is_bookmarked(&article.id)));

        AppViewModel {
            header: self.header(),
            search: self
                .feed
                .filter()
                .search_query()
                .map(|query| SearchSummary {
                    query: query.to_owned(),
                    count: self.feed.filtered_len(),
                }),
            cards: self.feed.visible_page().into_iter().map(card).collect(),
            has_more: self.feed.has_more(),
            carousel,
            bookmarks,
            open_article,
            dark_mode: self.dark_mode,
            dirty: self.dirty,
        }
    }

    fn header(&self) -> FeedHeader {
        match self.feed.filter() {
            Filter::None => FeedHeader::for_category(Category::General),
            Filter::Category(name) => match Category::from_slug(name) {
                Some(category) => FeedHeader::for_category(category),
                None => FeedHeader {
                    icon: "📰".to_string(),
                    title: name.clone(),
                    description: String::new(),
                },
            },
            Filter::Search(query) => FeedHeader {
                icon: "🔍".to_string(),
                title: "Search Results".to_string(),
                description: format!("Results for \"{query}\""),
            },
        }
    }
}
