use feed_logging::{feed_debug, feed_info, feed_warn};

use crate::{AppState, ArticleDraft, Carousel, Effect, Msg, ShareRequest, ToastKind};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FeedLoaded { breaking, regular } => load_feed(&mut state, breaking, regular),
        Msg::SetCategory(name) => {
            state.feed.set_category(&name);
            state.mark_dirty();
            Vec::new()
        }
        Msg::SetSearch(query) => {
            state.feed.set_search_query(&query);
            state.mark_dirty();
            Vec::new()
        }
        Msg::ClearSearch => {
            state.feed.set_category("general");
            state.mark_dirty();
            Vec::new()
        }
        Msg::AdvancePage => {
            // The load-more control is hidden once everything is shown.
            if state.feed.has_more() {
                state.feed.advance_page();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Bookmark(id) => bookmark(&mut state, &id),
        Msg::Unbookmark(id) => unbookmark(&mut state, &id),
        Msg::ToggleBookmark(id) => {
            if state.feed.is_bookmarked(&id) {
                unbookmark(&mut state, &id)
            } else {
                bookmark(&mut state, &id)
            }
        }
        Msg::CarouselNext => {
            if !state.carousel.is_empty() {
                state.carousel.next();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CarouselPrev => {
            if !state.carousel.is_empty() {
                state.carousel.prev();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::CarouselGoTo(index) => {
            if state.carousel.go_to(index) {
                state.mark_dirty();
            } else {
                feed_warn!(
                    "Ignoring carousel index {} ({} slides)",
                    index,
                    state.carousel.len()
                );
            }
            Vec::new()
        }
        Msg::CarouselHover { active: true } => {
            let effects: Vec<Effect> = state
                .carousel
                .stop_autoplay()
                .map(|handle| Effect::StopAutoplay {
                    generation: handle.generation,
                })
                .into_iter()
                .collect();
            if !effects.is_empty() {
                state.mark_dirty();
            }
            effects
        }
        Msg::CarouselHover { active: false } => {
            let effects = restart_autoplay(&mut state.carousel, state.autoplay_interval);
            if !effects.is_empty() {
                state.mark_dirty();
            }
            effects
        }
        Msg::AutoplayTick { generation } => {
            if state.carousel.autoplay_tick(generation) {
                state.mark_dirty();
            } else {
                feed_debug!("Dropping stale autoplay tick, generation {}", generation);
            }
            Vec::new()
        }
        Msg::OpenArticle(id) => {
            if state.feed.article(&id).is_some() {
                state.open_article = Some(id);
                state.mark_dirty();
            } else {
                feed_warn!("OpenArticle for unknown id {}", id);
            }
            Vec::new()
        }
        Msg::CloseArticle => {
            if state.open_article.take().is_some() {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ShowBookmarks => {
            if !state.bookmarks_open {
                state.bookmarks_open = true;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::HideBookmarks => {
            if state.bookmarks_open {
                state.bookmarks_open = false;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Share {
            article_id,
            platform,
        } => match state.feed.article(&article_id) {
            Some(article) => vec![Effect::Share(ShareRequest {
                article_id: article.id.clone(),
                title: article.title.clone(),
                description: article.description.clone(),
                platform,
            })],
            None => {
                feed_warn!("Share requested for unknown id {}", article_id);
                Vec::new()
            }
        },
        Msg::ToggleDarkMode => {
            state.dark_mode = !state.dark_mode;
            state.mark_dirty();
            let label = if state.dark_mode { "Dark" } else { "Light" };
            vec![
                Effect::ApplyTheme {
                    dark: state.dark_mode,
                },
                toast(format!("{label} mode enabled"), ToastKind::Success),
            ]
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn load_feed(
    state: &mut AppState,
    breaking: Vec<ArticleDraft>,
    regular: Vec<ArticleDraft>,
) -> Vec<Effect> {
    // Slides are the breaking articles that survived validation, so a
    // skipped breaking draft never reaches the carousel.
    let mut report = state.feed.set_articles(breaking);
    let slides = state.feed.articles().to_vec();
    report += state.feed.extend_articles(regular);

    let mut effects = Vec::new();
    if let Some(retired) = state.carousel.replace_slides(slides) {
        effects.push(Effect::StopAutoplay {
            generation: retired.generation,
        });
    }
    effects.extend(restart_autoplay(&mut state.carousel, state.autoplay_interval));

    feed_info!(
        "Feed loaded: {} articles, {} skipped, {} slides",
        report.accepted,
        report.skipped,
        state.carousel.len()
    );
    effects.push(toast("News Feed loaded successfully!", ToastKind::Success));
    if report.skipped > 0 {
        effects.push(toast(
            format!("Skipped {} invalid articles", report.skipped),
            ToastKind::Info,
        ));
    }
    state.mark_dirty();
    effects
}

fn restart_autoplay(carousel: &mut Carousel, interval: std::time::Duration) -> Vec<Effect> {
    let (retired, started) = carousel.start_autoplay(interval);
    let mut effects = Vec::with_capacity(2);
    if let Some(handle) = retired {
        effects.push(Effect::StopAutoplay {
            generation: handle.generation,
        });
    }
    if let Some(handle) = started {
        effects.push(Effect::StartAutoplay {
            generation: handle.generation,
            interval: handle.interval,
        });
    }
    effects
}

fn bookmark(state: &mut AppState, id: &str) -> Vec<Effect> {
    if state.feed.is_bookmarked(id) {
        return Vec::new();
    }
    let mut effects = Vec::with_capacity(2);
    if let Some(article) = state.feed.add_bookmark(id) {
        effects.push(Effect::CacheArticle(article.clone()));
    } else {
        feed_debug!("Bookmarked id {} has no loaded article; not cached", id);
    }
    state.mark_dirty();
    effects.push(toast("Article bookmarked!", ToastKind::Success));
    effects
}

fn unbookmark(state: &mut AppState, id: &str) -> Vec<Effect> {
    if !state.feed.remove_bookmark(id) {
        return Vec::new();
    }
    state.mark_dirty();
    vec![toast("Bookmark removed", ToastKind::Success)]
}

fn toast(message: impl Into<String>, kind: ToastKind) -> Effect {
    Effect::Toast {
        message: message.into(),
        kind,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_bookmark_uses_current_membership() {
        let (state, _) = update(AppState::new(), Msg::ToggleBookmark("ghost".to_string()));
        assert!(state.feed().is_bookmarked("ghost"));

        let (state, effects) = update(state, Msg::ToggleBookmark("ghost".to_string()));
        assert!(!state.feed().is_bookmarked("ghost"));
        assert_eq!(effects, vec![toast("Bookmark removed", ToastKind::Success)]);
    }
}
