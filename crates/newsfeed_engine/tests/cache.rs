use newsfeed_core::{update, AppState, Effect, Msg};
use newsfeed_engine::{sample_news, OfflineCache};

#[test]
fn cache_follows_bookmark_effects_and_rebuilds_from_feed() {
    let (state, _) = update(AppState::new(), sample_news().unwrap().into_msg());
    let mut cache = OfflineCache::new();

    let (state, effects) = update(state, Msg::Bookmark("article-2".to_string()));
    for effect in effects {
        if let Effect::CacheArticle(article) = effect {
            cache.store(article);
        }
    }
    assert_eq!(cache.len(), 1);
    assert_eq!(
        cache.get("article-2").map(|a| a.source.as_str()),
        Some("Health Tech Daily")
    );

    let (state, _) = update(state, Msg::Bookmark("breaking-1".to_string()));
    let (state, _) = update(state, Msg::Unbookmark("article-2".to_string()));
    let (state, _) = update(state, Msg::Bookmark("not-loaded".to_string()));

    cache.rebuild(state.feed());
    assert_eq!(cache.len(), 1);
    assert!(cache.get("breaking-1").is_some());
    assert!(cache.get("article-2").is_none());
    assert!(cache.get("not-loaded").is_none());
}

#[test]
fn empty_cache() {
    let cache = OfflineCache::new();
    assert!(cache.is_empty());
    assert!(cache.get("article-1").is_none());
}
