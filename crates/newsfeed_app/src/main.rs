//! Terminal news feed: category filters, search, a breaking-news carousel
//! and bookmarks over a bundled set of sample articles.

mod app;
mod config;
mod effects;
mod input;
mod logging;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use feed_logging::feed_info;
use log::LevelFilter;
use newsfeed_engine::{load_news_file, sample_news};

use crate::config::DEFAULT_CONFIG_FILENAME;
use crate::logging::LogDestination;

/// Browse a news feed in the terminal
#[derive(Parser, Debug)]
#[command(name = "newsfeed", version, about, long_about = None)]
struct Cli {
    /// Config file (RON)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,

    /// JSON file with `breaking` and `regular` articles
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// Milliseconds between carousel advances
    #[arg(long, value_name = "MS")]
    autoplay_ms: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum)]
    log: Option<LogDestination>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective config and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = config::load_config_or_default(&cli.config);
    let mut config = loaded.config.clone();
    if let Some(path) = cli.data {
        config.data_file = Some(path);
    }
    if let Some(ms) = cli.autoplay_ms {
        config.autoplay_interval_ms = ms;
    }
    if let Some(destination) = cli.log {
        config.log_destination = destination;
    }

    if cli.print_config {
        println!("{}", config.to_ron()?);
        return Ok(());
    }

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    logging::initialize(config.log_destination, level, &config.log_file);
    loaded.report(&cli.config);

    let news = match &config.data_file {
        Some(path) => load_news_file(path)
            .with_context(|| format!("could not load news from {}", path.display()))?,
        None => sample_news().context("bundled sample news is invalid")?,
    };
    feed_info!("Starting with {} article records", news.len());

    app::run_app(&config, news)
}
