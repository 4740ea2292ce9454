#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use tracing::Level;

use crate::constants::DEFAULT_ROSTER_PATH;

/// Environment variable naming the roster file.
pub const ROSTER_ENV: &str = "COURSEWORK_ROSTER";

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "COURSEWORK_LOG";

/// Parses the optional log-level value, defaulting to `Level::INFO` when
/// unset or unrecognised.
fn parse_log_level(val: Option<String>) -> Level {
    match val
        .map(|s| s.trim().to_ascii_lowercase())
        .as_deref()
        .unwrap_or("info")
    {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    }
}

/// Runtime settings read from the environment.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Roster used when the command line does not name one.
    roster_path: PathBuf,
    /// Maximum level of log events to print.
    log_level:   Level,
}

impl ConfigState {
    /// Reads settings from the process environment.
    fn new() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let roster_path = lookup(ROSTER_ENV)
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ROSTER_PATH.to_string());

        Self {
            roster_path: PathBuf::from(roster_path),
            log_level:   parse_log_level(lookup(LOG_ENV)),
        }
    }

    /// Returns the default roster path.
    pub fn roster_path(&self) -> &Path {
        &self.roster_path
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}

/// Global storage for the lazily constructed configuration state.
static CONFIG: OnceLock<ConfigState> = OnceLock::new();

/// Returns the active configuration, reading the environment on first use.
pub fn get() -> &'static ConfigState {
    CONFIG.get_or_init(ConfigState::new)
}

/// Returns the configured default roster path.
pub fn roster_path() -> PathBuf {
    get().roster_path().to_path_buf()
}

/// Returns the configured log level.
pub fn log_level() -> Level {
    get().log_level()
}
