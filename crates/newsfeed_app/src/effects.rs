use std::sync::mpsc;

use feed_logging::{feed_debug, feed_info, feed_warn};
use newsfeed_core::{Effect, Msg, ToastKind};
use newsfeed_engine::{share_link, AutoplayTimer, OfflineCache};
use url::Url;

use crate::app::Inbox;

/// A line of feedback for the user, produced while running effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Toast { kind: ToastKind, message: String },
    Share { platform: &'static str, url: String, permalink: String },
    Theme { dark: bool },
}

/// Executes the effects returned by `update`. Timer ticks come back into
/// the event loop as messages, keeping the state single-writer.
pub struct EffectRunner {
    autoplay: AutoplayTimer,
    cache: OfflineCache,
    share_base: Url,
}

impl EffectRunner {
    pub fn new(inbox: mpsc::Sender<Inbox>, share_base: Url) -> Self {
        let autoplay = AutoplayTimer::new(move |generation| {
            inbox
                .send(Inbox::Msg(Msg::AutoplayTick { generation }))
                .is_ok()
        });
        Self {
            autoplay,
            cache: OfflineCache::new(),
            share_base,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Notice> {
        let mut notices = Vec::new();
        for effect in effects {
            match effect {
                Effect::StartAutoplay {
                    generation,
                    interval,
                } => self.autoplay.start(generation, interval),
                Effect::StopAutoplay { generation } => self.autoplay.stop(generation),
                Effect::CacheArticle(article) => {
                    feed_debug!("Caching article {} for offline reading", article.id);
                    self.cache.store(article);
                }
                Effect::Toast { message, kind } => notices.push(Notice::Toast { kind, message }),
                Effect::Share(request) => match share_link(&self.share_base, &request) {
                    Ok(link) => {
                        feed_info!(
                            "Share {} via {}",
                            request.article_id,
                            request.platform.name()
                        );
                        notices.push(Notice::Share {
                            platform: request.platform.name(),
                            url: link.url.to_string(),
                            permalink: link.permalink.to_string(),
                        });
                        notices.push(Notice::Toast {
                            kind: ToastKind::Success,
                            message: format!("Shared to {}!", request.platform.name()),
                        });
                    }
                    Err(err) => {
                        feed_warn!("Cannot share {}: {}", request.article_id, err);
                        notices.push(Notice::Toast {
                            kind: ToastKind::Error,
                            message: format!("Could not build share link: {err}"),
                        });
                    }
                },
                Effect::ApplyTheme { dark } => notices.push(Notice::Theme { dark }),
            }
        }
        notices
    }

    #[cfg(test)]
    pub fn cache(&self) -> &OfflineCache {
        &self.cache
    }

    #[cfg(test)]
    pub fn live_autoplay_generation(&self) -> Option<u64> {
        self.autoplay.live_generation()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use newsfeed_core::{update, AppState, SharePlatform};
    use newsfeed_engine::sample_news;

    use super::*;

    fn runner() -> (EffectRunner, mpsc::Receiver<Inbox>) {
        let (tx, rx) = mpsc::channel();
        let base = Url::parse("http://localhost:8000/index.html").unwrap();
        (EffectRunner::new(tx, base), rx)
    }

    #[test]
    fn autoplay_ticks_arrive_as_messages() {
        let (mut runner, rx) = runner();
        runner.run(vec![Effect::StartAutoplay {
            generation: 4,
            interval: Duration::from_millis(5),
        }]);
        assert_eq!(runner.live_autoplay_generation(), Some(4));

        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(Inbox::Msg(Msg::AutoplayTick { generation })) => assert_eq!(generation, 4),
            other => panic!("expected autoplay tick, got {other:?}"),
        }

        runner.run(vec![Effect::StopAutoplay { generation: 4 }]);
        assert_eq!(runner.live_autoplay_generation(), None);
    }

    #[test]
    fn bookmark_effects_fill_the_cache_and_toast() {
        let (mut runner, _rx) = runner();
        let (state, _) = update(AppState::new(), sample_news().unwrap().into_msg());
        let (_, effects) = update(state, Msg::Bookmark("article-5".to_string()));

        let notices = runner.run(effects);
        assert!(runner.cache().get("article-5").is_some());
        assert_eq!(
            notices,
            vec![Notice::Toast {
                kind: ToastKind::Success,
                message: "Article bookmarked!".to_string(),
            }]
        );
    }

    #[test]
    fn share_produces_link_and_toast() {
        let (mut runner, _rx) = runner();
        let (state, _) = update(AppState::new(), sample_news().unwrap().into_msg());
        let (_, effects) = update(
            state,
            Msg::Share {
                article_id: "article-1".to_string(),
                platform: SharePlatform::Twitter,
            },
        );

        let notices = runner.run(effects);
        assert_eq!(notices.len(), 2);
        match &notices[0] {
            Notice::Share {
                platform,
                url,
                permalink,
            } => {
                assert_eq!(*platform, "Twitter");
                assert!(url.starts_with("https://twitter.com/intent/tweet?url="));
                assert_eq!(permalink, "http://localhost:8000/index.html?article=article-1");
            }
            other => panic!("expected share notice, got {other:?}"),
        }
    }
}
