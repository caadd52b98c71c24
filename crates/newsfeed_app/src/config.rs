use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use feed_logging::{feed_info, feed_warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logging::LogDestination;

pub const DEFAULT_CONFIG_FILENAME: &str = "newsfeed.ron";

/// Settings read from `newsfeed.ron`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub autoplay_interval_ms: u64,
    pub search_debounce_ms: u64,
    /// Page that shared article links point back to.
    pub share_base_url: String,
    /// JSON file with `breaking` and `regular` articles; the bundled
    /// sample is used when unset.
    pub data_file: Option<PathBuf>,
    pub log_destination: LogDestination,
    pub log_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            search_debounce_ms: 300,
            share_base_url: "http://localhost:8000/index.html".to_string(),
            data_file: None,
            log_destination: LogDestination::File,
            log_file: PathBuf::from("./newsfeed.log"),
        }
    }
}

impl AppConfig {
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Reads the config file. A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// The settings in effect plus the problem, if any, that forced a
/// fallback to defaults. Kept until logging is up so it can be reported.
#[derive(Debug)]
pub struct ConfigLoad {
    pub config: AppConfig,
    pub problem: Option<ConfigError>,
}

impl ConfigLoad {
    /// Logs where the settings came from. Call after the logger is installed.
    pub fn report(&self, path: &Path) {
        match &self.problem {
            None => feed_info!("Using config from {:?}", path),
            Some(err) => feed_warn!("{}; using default settings", err),
        }
    }
}

/// Like `load_config`, but falls back to defaults on error.
pub fn load_config_or_default(path: &Path) -> ConfigLoad {
    match load_config(path) {
        Ok(config) => ConfigLoad {
            config,
            problem: None,
        },
        Err(err) => {
            eprintln!("Warning: {err}; using default settings");
            ConfigLoad {
                config: AppConfig::default(),
                problem: Some(err),
            }
        }
    }
}
