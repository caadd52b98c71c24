use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use newsfeed_core::{AppViewModel, CardView, CarouselView, ToastKind};
use newsfeed_engine::{format_relative, truncate};

use crate::effects::Notice;

const DESCRIPTION_WIDTH: usize = 100;
const RULE: &str = "────────────────────────────────────────────────────────────";

/// Text for a view change: just the carousel line when nothing else moved.
pub fn render_update(
    previous: Option<&AppViewModel>,
    next: &AppViewModel,
    now: DateTime<Utc>,
) -> String {
    match (previous, &next.carousel) {
        (Some(prev), Some(carousel)) if only_carousel_changed(prev, next) => {
            format!("{}\n", carousel_line(carousel, now))
        }
        _ => render(next, now),
    }
}

fn only_carousel_changed(prev: &AppViewModel, next: &AppViewModel) -> bool {
    let strip = |view: &AppViewModel| AppViewModel {
        carousel: None,
        dirty: false,
        ..view.clone()
    };
    prev.carousel != next.carousel && strip(prev) == strip(next)
}

pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let theme = if view.dark_mode { "🌙" } else { "☀️" };

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{} {}  {}", view.header.icon, view.header.title, theme);
    if !view.header.description.is_empty() {
        let _ = writeln!(out, "{}", view.header.description);
    }
    if let Some(search) = &view.search {
        let _ = writeln!(
            out,
            "Search Results for \"{}\": Found {} articles",
            search.query, search.count
        );
    }

    if let Some(carousel) = &view.carousel {
        let _ = writeln!(out, "{}", carousel_line(carousel, now));
    }
    let _ = writeln!(out, "{RULE}");

    if view.cards.is_empty() {
        let _ = writeln!(out, "No articles found.");
    }
    for (position, card) in view.cards.iter().enumerate() {
        write_card(&mut out, position + 1, card, now);
    }
    if view.has_more {
        let _ = writeln!(out, "… `more` loads more articles");
    }

    if let Some(bookmarks) = &view.bookmarks {
        let _ = writeln!(out, "{RULE}\n🔖 Bookmarks");
        if bookmarks.is_empty() {
            let _ = writeln!(out, "No bookmarks yet. Use `bookmark <id>` to save articles.");
        }
        for (position, card) in bookmarks.iter().enumerate() {
            write_card(&mut out, position + 1, card, now);
        }
    }

    if let Some(article) = &view.open_article {
        let card = &article.card;
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "[{}] {}", card.category_label, card.title);
        let _ = writeln!(
            out,
            "By {} · {}{}",
            card.source,
            format_relative(card.published_at, now),
            if card.bookmarked { " · 🔖" } else { "" }
        );
        let _ = writeln!(out, "{}\n\n{}", card.description, article.body);
    }

    out
}

fn carousel_line(carousel: &CarouselView, now: DateTime<Utc>) -> String {
    let indicators: String = (0..carousel.slides.len())
        .map(|i| if i == carousel.index { '●' } else { '○' })
        .collect();
    let state = if carousel.autoplay { "▶" } else { "⏸" };
    match carousel.slides.get(carousel.index) {
        Some(slide) => format!(
            "Breaking {state} {indicators} [{}] {} · {} · {}",
            slide.category_label,
            slide.title,
            slide.source,
            format_relative(slide.published_at, now)
        ),
        None => format!("Breaking {state} {indicators}"),
    }
}

fn write_card(out: &mut String, position: usize, card: &CardView, now: DateTime<Utc>) {
    let mark = if card.bookmarked { " 🔖" } else { "" };
    let _ = writeln!(
        out,
        "{position:>2}. [{}] {}{mark}",
        card.category_label, card.title
    );
    let _ = writeln!(out, "    {}", truncate(&card.description, DESCRIPTION_WIDTH));
    let _ = writeln!(
        out,
        "    {} · {} · id: {}",
        card.source,
        format_relative(card.published_at, now),
        card.id
    );
}

pub fn render_notice(notice: &Notice) -> String {
    match notice {
        Notice::Toast { kind, message } => {
            let icon = match kind {
                ToastKind::Success => "✅",
                ToastKind::Error => "❌",
                ToastKind::Info => "ℹ️",
            };
            format!("{icon} {message}")
        }
        Notice::Share {
            platform,
            url,
            permalink,
        } => format!("📤 {platform}: {url}\n   link: {permalink}"),
        Notice::Theme { dark } => {
            format!("Theme: {}", if *dark { "dark" } else { "light" })
        }
    }
}
