//! News feed core: pure state machine and view-model helpers.
mod article;
mod carousel;
mod category;
mod effect;
mod feed;
mod filter;
mod msg;
mod state;
mod update;
mod view_model;

pub use article::{Article, ArticleDraft, ArticleError, ArticleId};
pub use carousel::{AutoplayHandle, Carousel};
pub use category::Category;
pub use effect::{Effect, SharePlatform, ShareRequest, ToastKind};
pub use feed::{BookmarkChange, FeedState, LoadReport, PAGE_SIZE};
pub use filter::Filter;
pub use msg::Msg;
pub use state::{AppState, DEFAULT_AUTOPLAY_INTERVAL};
pub use update::update;
pub use view_model::{
    AppViewModel, ArticleDetailView, CardView, CarouselView, FeedHeader, SearchSummary, SlideView,
};
