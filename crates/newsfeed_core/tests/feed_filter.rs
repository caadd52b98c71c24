use newsfeed_core::{ArticleDraft, FeedState, Filter};
use proptest::prelude::*;

fn draft(id: &str, title: &str, category: &str) -> ArticleDraft {
    ArticleDraft {
        id: Some(id.to_string()),
        title: Some(title.to_string()),
        description: Some(format!("About {title}")),
        category: Some(category.to_string()),
        source: Some("Wire".to_string()),
        published_at: Some("2025-10-15T07:20:00Z".to_string()),
        content: None,
        image: None,
    }
}

fn ids(feed: &FeedState) -> Vec<&str> {
    feed.filtered_view().iter().map(|a| a.id.as_str()).collect()
}

fn sample_feed() -> FeedState {
    let mut feed = FeedState::new();
    feed.set_articles(vec![
        draft("a", "Cup final", "sports"),
        draft("b", "Chip shortage", "technology"),
        draft("c", "Marathon record", "sports"),
    ]);
    feed
}

#[test]
fn category_keeps_matching_articles_in_order() {
    let mut feed = sample_feed();
    feed.set_category("sports");
    assert_eq!(ids(&feed), vec!["a", "c"]);
    assert_eq!(feed.filter(), &Filter::Category("sports".to_string()));
}

#[test]
fn search_matches_category_text() {
    let mut feed = sample_feed();
    feed.set_search_query("tech");
    assert_eq!(ids(&feed), vec!["b"]);
}

#[test]
fn search_is_case_insensitive_across_fields() {
    let mut feed = sample_feed();
    feed.set_search_query("MARATHON");
    assert_eq!(ids(&feed), vec!["c"]);

    feed.set_search_query("about chip");
    assert_eq!(ids(&feed), vec!["b"]);
}

#[test]
fn search_and_category_replace_each_other() {
    let mut feed = sample_feed();
    feed.set_category("sports");
    feed.set_search_query("chip");
    assert_eq!(feed.filter(), &Filter::Search("chip".to_string()));
    assert_eq!(ids(&feed), vec!["b"]);

    feed.set_category("technology");
    assert_eq!(feed.filter(), &Filter::Category("technology".to_string()));
    assert_eq!(ids(&feed), vec!["b"]);
}

#[test]
fn blank_search_falls_back_to_unfiltered() {
    let mut feed = sample_feed();
    feed.set_category("sports");
    feed.set_search_query("   ");
    assert_eq!(feed.filter(), &Filter::None);
    assert_eq!(ids(&feed), vec!["a", "b", "c"]);
}

#[test]
fn general_twice_is_idempotent_and_resets_page() {
    let mut feed = FeedState::with_page_size(1);
    feed.set_articles(vec![
        draft("a", "Cup final", "sports"),
        draft("b", "Chip shortage", "technology"),
    ]);
    feed.advance_page();
    feed.set_category("general");
    let first: Vec<String> = ids(&feed).into_iter().map(str::to_owned).collect();
    assert_eq!(feed.page(), 1);

    feed.advance_page();
    feed.set_category("general");
    assert_eq!(ids(&feed), first);
    assert_eq!(feed.page(), 1);
}

#[test]
fn no_matches_is_an_empty_view() {
    let mut feed = sample_feed();
    feed.set_search_query("volcano");
    assert!(feed.filtered_view().is_empty());
    assert!(!feed.has_more());

    feed.set_category("politics");
    assert!(feed.filtered_view().is_empty());
    assert!(!feed.has_more());
}

#[test]
fn replacing_articles_reapplies_current_filter() {
    let mut feed = sample_feed();
    feed.set_category("sports");
    feed.set_articles(vec![
        draft("x", "Derby day", "sports"),
        draft("y", "Rate cut", "business"),
    ]);
    assert_eq!(ids(&feed), vec!["x"]);

    feed.set_articles(Vec::new());
    assert!(feed.filtered_view().is_empty());
}

const CATEGORIES: [&str; 7] = [
    "general",
    "technology",
    "sports",
    "business",
    "health",
    "science",
    "entertainment",
];

fn arb_articles() -> impl Strategy<Value = Vec<(String, usize)>> {
    prop::collection::vec(("[a-zA-Z][a-zA-Z ]{0,11}", 0..CATEGORIES.len()), 0..20)
}

fn build(articles: &[(String, usize)]) -> FeedState {
    let mut feed = FeedState::new();
    feed.set_articles(
        articles
            .iter()
            .enumerate()
            .map(|(i, (title, cat))| draft(&format!("id-{i}"), title, CATEGORIES[*cat])),
    );
    feed
}

proptest! {
    #[test]
    fn category_filter_is_exact_and_stable(
        articles in arb_articles(),
        pick in 1..CATEGORIES.len(),
    ) {
        let mut feed = build(&articles);
        let category = CATEGORIES[pick];
        feed.set_category(category);

        let expected: Vec<String> = articles
            .iter()
            .enumerate()
            .filter(|(_, (_, cat))| CATEGORIES[*cat] == category)
            .map(|(i, _)| format!("id-{i}"))
            .collect();
        let actual: Vec<String> = feed.filtered_view().iter().map(|a| a.id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn search_partitions_articles(
        articles in arb_articles(),
        query in "[a-zA-Z]{1,3}",
    ) {
        let mut feed = build(&articles);
        feed.set_search_query(&query);
        let needle = query.to_lowercase();
        let hit = |a: &newsfeed_core::Article| {
            a.title.to_lowercase().contains(&needle)
                || a.description.to_lowercase().contains(&needle)
                || a.category.as_str().contains(&needle)
        };

        let shown: Vec<&str> = feed.filtered_view().iter().map(|a| a.id.as_str()).collect();
        for article in feed.articles() {
            prop_assert_eq!(hit(article), shown.contains(&article.id.as_str()));
        }
    }
}
