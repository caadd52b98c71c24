use crate::{ArticleDraft, ArticleId, SharePlatform};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Initial data: breaking news feeds the carousel, and the feed holds
    /// breaking followed by regular articles.
    FeedLoaded {
        breaking: Vec<ArticleDraft>,
        regular: Vec<ArticleDraft>,
    },
    /// User picked a category from the navigation bar.
    SetCategory(String),
    /// Settled (debounced or submitted) search query.
    SetSearch(String),
    /// User clicked "clear search".
    ClearSearch,
    /// User clicked "load more" or scrolled near the end of the feed.
    AdvancePage,
    Bookmark(ArticleId),
    Unbookmark(ArticleId),
    /// Bookmark button on a card or in the article view.
    ToggleBookmark(ArticleId),
    CarouselNext,
    CarouselPrev,
    CarouselGoTo(usize),
    /// Pointer or focus entered (`true`) or left (`false`) the carousel.
    CarouselHover { active: bool },
    /// Autoplay timer fired.
    AutoplayTick { generation: u64 },
    OpenArticle(ArticleId),
    CloseArticle,
    ShowBookmarks,
    HideBookmarks,
    Share {
        article_id: ArticleId,
        platform: SharePlatform,
    },
    ToggleDarkMode,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for unrecognized input.
    NoOp,
}
