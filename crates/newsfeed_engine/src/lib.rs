//! News feed engine: the I/O-side collaborators of the core state machine.
mod cache;
mod debounce;
mod format;
mod news;
mod schedule;
mod share;

pub use cache::OfflineCache;
pub use debounce::SearchDebouncer;
pub use format::{format_relative, truncate};
pub use news::{load_news_file, parse_news, sample_news, LoadError, NewsData};
pub use schedule::{AutoplayTimer, ScheduledTask};
pub use share::{permalink, share_link, ShareError, ShareLink};
