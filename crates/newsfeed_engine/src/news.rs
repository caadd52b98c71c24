use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use feed_logging::feed_info;
use newsfeed_core::{ArticleDraft, Msg};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SAMPLE_NEWS: &str = include_str!("../data/sample_news.json");

/// Unvalidated article data: breaking stories for the carousel plus the
/// regular feed. Validation happens when the core loads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsData {
    pub breaking: Vec<ArticleDraft>,
    pub regular: Vec<ArticleDraft>,
}

impl NewsData {
    pub fn len(&self) -> usize {
        self.breaking.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_msg(self) -> Msg {
        Msg::FeedLoaded {
            breaking: self.breaking,
            regular: self.regular,
        }
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid news data: {0}")]
    Json(#[from] serde_json::Error),
}

/// The bundled demo articles.
pub fn sample_news() -> Result<NewsData, LoadError> {
    parse_news(SAMPLE_NEWS)
}

pub fn parse_news(text: &str) -> Result<NewsData, LoadError> {
    Ok(serde_json::from_str(text)?)
}

pub fn load_news_file(path: &Path) -> Result<NewsData, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = parse_news(&text)?;
    feed_info!("Loaded {} article records from {:?}", data.len(), path);
    Ok(data)
}
