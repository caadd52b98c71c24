use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Category;

pub type ArticleId = String;

/// A validated, immutable news item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub source: String,
    pub published_at: DateTime<Utc>,
    /// Full body. Empty when the data source only carries a summary.
    pub content: String,
    pub image: Option<String>,
}

/// Article as it arrives from a data file: every field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArticleDraft {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArticleError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("invalid publishedAt `{value}`: {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl TryFrom<ArticleDraft> for Article {
    type Error = ArticleError;

    fn try_from(draft: ArticleDraft) -> Result<Self, Self::Error> {
        let id = required(draft.id, "id")?;
        let title = required(draft.title, "title")?;
        let description = required(draft.description, "description")?;
        let source = required(draft.source, "source")?;

        let category_slug = required(draft.category, "category")?;
        let category = Category::from_slug(category_slug.trim())
            .ok_or(ArticleError::UnknownCategory(category_slug))?;

        let raw_published = required(draft.published_at, "publishedAt")?;
        let published_at = DateTime::parse_from_rfc3339(raw_published.trim())
            .map_err(|err| ArticleError::InvalidTimestamp {
                reason: err.to_string(),
                value: raw_published,
            })?
            .with_timezone(&Utc);

        Ok(Self {
            id,
            title,
            description,
            category,
            source,
            published_at,
            content: draft.content.unwrap_or_default(),
            image: draft.image.filter(|image| !image.trim().is_empty()),
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ArticleError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ArticleError::MissingField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            id: Some("article-1".to_string()),
            title: Some("Mars mission scheduled".to_string()),
            description: Some("Agency announces timeline".to_string()),
            category: Some("science".to_string()),
            source: Some("Space Today".to_string()),
            published_at: Some("2025-10-14T22:10:00Z".to_string()),
            content: None,
            image: Some("  ".to_string()),
        }
    }

    #[test]
    fn valid_draft_becomes_article() {
        let article = Article::try_from(draft()).unwrap();
        assert_eq!(article.id, "article-1");
        assert_eq!(article.category, Category::Science);
        assert_eq!(article.published_at.to_rfc3339(), "2025-10-14T22:10:00+00:00");
        assert!(article.content.is_empty());
        assert_eq!(article.image, None);
    }

    #[test]
    fn blank_required_field_is_missing() {
        let mut incomplete = draft();
        incomplete.title = Some("   ".to_string());
        assert_eq!(
            Article::try_from(incomplete),
            Err(ArticleError::MissingField("title"))
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut odd = draft();
        odd.category = Some("politics".to_string());
        assert_eq!(
            Article::try_from(odd),
            Err(ArticleError::UnknownCategory("politics".to_string()))
        );
    }

    #[test]
    fn non_rfc3339_timestamp_is_rejected() {
        let mut odd = draft();
        odd.published_at = Some("yesterday".to_string());
        assert!(matches!(
            Article::try_from(odd),
            Err(ArticleError::InvalidTimestamp { value, .. }) if value == "yesterday"
        ));
    }
}
