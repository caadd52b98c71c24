use std::time::Duration;

use crate::{Article, ArticleId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a repeating timer that posts `Msg::AutoplayTick { generation }`.
    StartAutoplay { generation: u64, interval: Duration },
    StopAutoplay { generation: u64 },
    /// Store a bookmarked article in the offline cache.
    CacheArticle(Article),
    Toast { message: String, kind: ToastKind },
    Share(ShareRequest),
    ApplyTheme { dark: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub article_id: ArticleId,
    pub title: String,
    pub description: String,
    pub platform: SharePlatform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    Facebook,
    Twitter,
    LinkedIn,
    WhatsApp,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] = [
        SharePlatform::Facebook,
        SharePlatform::Twitter,
        SharePlatform::LinkedIn,
        SharePlatform::WhatsApp,
    ];

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug.to_ascii_lowercase().as_str() {
            "facebook" => Some(SharePlatform::Facebook),
            "twitter" => Some(SharePlatform::Twitter),
            "linkedin" => Some(SharePlatform::LinkedIn),
            "whatsapp" => Some(SharePlatform::WhatsApp),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SharePlatform::Facebook => "Facebook",
            SharePlatform::Twitter => "Twitter",
            SharePlatform::LinkedIn => "LinkedIn",
            SharePlatform::WhatsApp => "WhatsApp",
        }
    }
}
