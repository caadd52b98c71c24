use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use feed_logging::{feed_info, set_dispatch_seq};
use newsfeed_core::{update, AppState, AppViewModel, Msg};
use newsfeed_engine::{NewsData, SearchDebouncer};
use url::Url;

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::input::{parse_command, Command, HELP};
use crate::ui::render::{render_notice, render_update};

/// Everything that reaches the single control thread.
#[derive(Debug)]
pub enum Inbox {
    Msg(Msg),
    /// Text for the user that does not go through the state machine.
    Say(String),
    Shutdown,
}

pub fn run_app(config: &AppConfig, news: NewsData) -> Result<()> {
    let share_base = Url::parse(&config.share_base_url)
        .with_context(|| format!("invalid share_base_url {:?}", config.share_base_url))?;

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let runner = EffectRunner::new(inbox_tx.clone(), share_base);
    let mut event_loop = EventLoop::new(
        AppState::with_autoplay_interval(config.autoplay_interval()),
        runner,
        io::stdout(),
    );

    // Queued ahead of any input so the load is dispatch #1.
    inbox_tx
        .send(Inbox::Msg(news.into_msg()))
        .context("event loop inbox closed")?;
    spawn_input_reader(inbox_tx, config.search_debounce());

    event_loop.say("Type `help` for commands.")?;

    for (seq, inbox) in (1u64..).zip(inbox_rx.iter()) {
        if !event_loop.handle(seq, inbox)? {
            break;
        }
    }

    feed_info!("Shutting down");
    Ok(())
}

/// Owns the state and applies messages one at a time.
pub struct EventLoop<W: Write> {
    state: AppState,
    runner: EffectRunner,
    last_view: Option<AppViewModel>,
    out: W,
}

impl<W: Write> EventLoop<W> {
    pub fn new(state: AppState, runner: EffectRunner, out: W) -> Self {
        Self {
            state,
            runner,
            last_view: None,
            out,
        }
    }

    /// Applies one inbox entry with its log lines tagged `seq`. Returns
    /// false on shutdown.
    pub fn handle(&mut self, seq: u64, inbox: Inbox) -> io::Result<bool> {
        set_dispatch_seq(seq);
        match inbox {
            Inbox::Msg(msg) => self.dispatch(msg)?,
            Inbox::Say(text) => self.say(&text)?,
            Inbox::Shutdown => return Ok(false),
        }
        Ok(true)
    }

    pub fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let notices = self.runner.run(effects);

        if was_dirty {
            let view = self.state.view();
            let text = render_update(self.last_view.as_ref(), &view, Utc::now());
            self.out.write_all(text.as_bytes())?;
            self.last_view = Some(view);
        }
        for notice in &notices {
            writeln!(self.out, "{}", render_notice(notice))?;
        }
        self.out.flush()
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    #[cfg(test)]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

/// Reads command lines from stdin. Search typing goes through the
/// debouncer so only settled queries are dispatched.
fn spawn_input_reader(inbox: mpsc::Sender<Inbox>, debounce: Duration) {
    thread::spawn(move || {
        let search_inbox = inbox.clone();
        let mut debouncer = SearchDebouncer::new(debounce, move |query| {
            let _ = search_inbox.send(Inbox::Msg(Msg::SetSearch(query)));
        });

        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            let delivered = match parse_command(&line) {
                Command::Dispatch(msg) => {
                    if msg == Msg::ClearSearch {
                        debouncer.cancel();
                    }
                    inbox.send(Inbox::Msg(msg)).is_ok()
                }
                Command::Type(text) => {
                    debouncer.input(text);
                    true
                }
                Command::Submit(text) => {
                    debouncer.flush(text);
                    true
                }
                Command::Help => inbox.send(Inbox::Say(HELP.to_string())).is_ok(),
                Command::Invalid(reason) => inbox.send(Inbox::Say(reason)).is_ok(),
                Command::Quit => false,
            };
            if !delivered {
                break;
            }
        }

        debouncer.cancel();
        let _ = inbox.send(Inbox::Shutdown);
    });
}
