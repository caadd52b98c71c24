//! Translates typed command lines into messages for the event loop.

use newsfeed_core::{Msg, SharePlatform};

pub const HELP: &str = "\
Commands:
  category <name>       show one category (general shows everything)
  type <text>           search as you type (debounced)
  search <text>         search now
  clear                 clear the search
  more                  load more articles
  open <id> | close     show or close an article
  bookmark <id>         add or remove a bookmark
  bookmarks | hide      show or hide the bookmarks panel
  share <id> <platform> facebook, twitter, linkedin or whatsapp
  next | prev | goto <n>  move the breaking news carousel
  hover | leave         pause or resume carousel autoplay
  dark                  toggle dark mode
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Msg),
    /// Keystrokes into the search box; settles after the debounce delay.
    Type(String),
    /// Search submitted with Enter or the search button.
    Submit(String),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match (verb.to_ascii_lowercase().as_str(), rest) {
        ("", _) => Command::Dispatch(Msg::Tick),
        ("category" | "c", name) if !name.is_empty() => {
            Command::Dispatch(Msg::SetCategory(name.to_ascii_lowercase()))
        }
        ("type", text) => Command::Type(text.to_string()),
        ("search" | "s", text) => Command::Submit(text.to_string()),
        ("clear", "") => Command::Dispatch(Msg::ClearSearch),
        ("more" | "m", "") => Command::Dispatch(Msg::AdvancePage),
        ("open" | "o", id) if !id.is_empty() => Command::Dispatch(Msg::OpenArticle(id.to_string())),
        ("close", "") => Command::Dispatch(Msg::CloseArticle),
        ("bookmark" | "b", id) if !id.is_empty() => {
            Command::Dispatch(Msg::ToggleBookmark(id.to_string()))
        }
        ("bookmarks", "") => Command::Dispatch(Msg::ShowBookmarks),
        ("hide", "") => Command::Dispatch(Msg::HideBookmarks),
        ("share", args) => parse_share(args),
        ("next" | "n", "") => Command::Dispatch(Msg::CarouselNext),
        ("prev" | "p", "") => Command::Dispatch(Msg::CarouselPrev),
        ("goto" | "g", position) => match position.parse::<usize>() {
            // Positions are shown 1-based.
            Ok(n) if n >= 1 => Command::Dispatch(Msg::CarouselGoTo(n - 1)),
            _ => Command::Invalid(format!("not a slide number: {position:?}")),
        },
        ("hover", "") => Command::Dispatch(Msg::CarouselHover { active: true }),
        ("leave", "") => Command::Dispatch(Msg::CarouselHover { active: false }),
        ("dark", "") => Command::Dispatch(Msg::ToggleDarkMode),
        ("help" | "h" | "?", _) => Command::Help,
        ("quit" | "q" | "exit", _) => Command::Quit,
        _ => Command::Invalid(format!("unknown command: {line}")),
    }
}

fn parse_share(args: &str) -> Command {
    let mut parts = args.split_whitespace();
    match (parts.next(), parts.next().map(SharePlatform::from_slug), parts.next()) {
        (Some(id), Some(Some(platform)), None) => Command::Dispatch(Msg::Share {
            article_id: id.to_string(),
            platform,
        }),
        _ => Command::Invalid("usage: share <id> <facebook|twitter|linkedin|whatsapp>".into()),
    }
}
