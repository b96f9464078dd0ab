//! Session configuration loaded from TOML.

use crate::cli::SettingsArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use rewind_core::{GameState, PlayerNames, SortOrder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for one play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Initial name shown for X.
    #[serde(default)]
    player1: String,

    /// Initial name shown for O.
    #[serde(default)]
    player2: String,

    /// Initial move list order.
    #[serde(default)]
    sort_order: SortOrder,

    /// File receiving log output while the terminal UI is running.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("rewind.log")
}

fn default_log_filter() -> String {
    "info,rewind_core=debug".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            player1: String::new(),
            player2: String::new(),
            sort_order: SortOrder::default(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(sort_order = %config.sort_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, args: &SettingsArgs) -> Self {
        if let Some(name) = &args.player1 {
            self.player1 = name.clone();
        }
        if let Some(name) = &args.player2 {
            self.player2 = name.clone();
        }
        if args.descending {
            self.sort_order = SortOrder::Descending;
        }
        self
    }

    /// Starting state for a session using these settings.
    pub fn initial_state(&self) -> GameState {
        GameState::with_settings(
            PlayerNames::new(self.player1.clone(), self.player2.clone()),
            self.sort_order,
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
