use chrono::{DateTime, Datelike, Utc};

/// Human-friendly age of a timestamp relative to `now`.
pub fn format_relative(published: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let hours = (now - published).num_hours();
    let days = hours / 24;

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else if published.year() == now.year() {
        published.format("%b %-d").to_string()
    } else {
        published.format("%b %-d, %Y").to_string()
    }
}

/// Cuts `text` to at most `max_chars` characters, appending "..." when shortened.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
