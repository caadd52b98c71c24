use chrono::{DateTime, Utc};

use crate::{Article, ArticleId, Category};

/// Shown when an article carries no body text.
const CONTENT_PLACEHOLDER: &str = "Full article content would be loaded from a news provider \
     in a production deployment. This demo shows the article structure and interface.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub header: FeedHeader,
    pub search: Option<SearchSummary>,
    pub cards: Vec<CardView>,
    pub has_more: bool,
    pub carousel: Option<CarouselView>,
    /// Present while the bookmarks panel is open.
    pub bookmarks: Option<Vec<CardView>>,
    pub open_article: Option<ArticleDetailView>,
    pub dark_mode: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedHeader {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl FeedHeader {
    pub(crate) fn for_category(category: Category) -> Self {
        Self {
            icon: category.icon().to_string(),
            title: category.display_name().to_string(),
            description: category.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub query: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub category_label: &'static str,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub image: Option<String>,
    pub bookmarked: bool,
}

impl CardView {
    pub(crate) fn new(article: &Article, bookmarked: bool) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            category_label: article.category.display_name(),
            source: article.source.clone(),
            published_at: article.published_at,
            image: article.image.clone(),
            bookmarked,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView {
    pub index: usize,
    pub slides: Vec<SlideView>,
    pub at_start: bool,
    pub at_end: bool,
    pub autoplay: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideView {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub category_label: &'static str,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

impl SlideView {
    pub(crate) fn new(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            title: article.title.clone(),
            description: article.description.clone(),
            category_label: article.category.display_name(),
            source: article.source.clone(),
            published_at: article.published_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetailView {
    pub card: CardView,
    pub body: String,
}

impl ArticleDetailView {
    pub(crate) fn new(article: &Article, bookmarked: bool) -> Self {
        let body = if article.content.trim().is_empty() {
            CONTENT_PLACEHOLDER.to_string()
        } else {
            article.content.clone()
        };
        Self {
            card: CardView::new(article, bookmarked),
            body,
        }
    }
}
