use newsfeed_core::{SharePlatform, ShareRequest};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShareError {
    #[error("base url `{0}` cannot carry a path or query")]
    NotABase(String),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub platform: SharePlatform,
    /// Link back to the article in this app.
    pub permalink: Url,
    /// Link that opens the platform's share dialog.
    pub url: Url,
}

/// `base?article=<id>`, replacing any query already on `base`.
pub fn permalink(base: &Url, article_id: &str) -> Result<Url, ShareError> {
    if base.cannot_be_a_base() {
        return Err(ShareError::NotABase(base.to_string()));
    }
    let mut link = base.clone();
    link.set_fragment(None);
    link.query_pairs_mut()
        .clear()
        .append_pair("article", article_id);
    Ok(link)
}

pub fn share_link(base: &Url, request: &ShareRequest) -> Result<ShareLink, ShareError> {
    let permalink = permalink(base, &request.article_id)?;
    let (endpoint, key, value) = match request.platform {
        SharePlatform::Facebook => (
            "https://www.facebook.com/sharer/sharer.php",
            "u",
            permalink.to_string(),
        ),
        SharePlatform::Twitter => (
            "https://twitter.com/intent/tweet",
            "url",
            permalink.to_string(),
        ),
        SharePlatform::LinkedIn => (
            "https://www.linkedin.com/sharing/share-offsite/",
            "url",
            permalink.to_string(),
        ),
        SharePlatform::WhatsApp => (
            "https://wa.me/",
            "text",
            format!("{} - {} {}", request.title, request.description, permalink),
        ),
    };

    let mut url = Url::parse(endpoint)?;
    url.query_pairs_mut().append_pair(key, &value);
    Ok(ShareLink {
        platform: request.platform,
        permalink,
        url,
    })
}
