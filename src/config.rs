//! Runtime configuration loaded from TOML and overridden by the CLI.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use tictactoe_rules::Dimensions;
use tracing::{debug, info, instrument};

/// Game and logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameConfig {
    /// Board columns.
    #[serde(default = "default_columns")]
    columns: usize,

    /// Board rows.
    #[serde(default = "default_rows")]
    rows: usize,

    /// Show the jump list newest first on startup.
    #[serde(default)]
    list_reversed: bool,

    /// File that receives log output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_columns() -> usize {
    Dimensions::STANDARD.columns()
}

fn default_rows() -> usize {
    Dimensions::STANDARD.rows()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("tictactoe_history.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            rows: default_rows(),
            list_reversed: false,
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(columns = config.columns, rows = config.rows, "Config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.dimensions()?;
        Ok(config)
    }

    /// Overrides the board size.
    pub fn set_board(&mut self, columns: Option<usize>, rows: Option<usize>) {
        if let Some(columns) = columns {
            self.columns = columns;
        }
        if let Some(rows) = rows {
            self.rows = rows;
        }
    }

    /// Overrides the startup list order.
    pub fn set_list_reversed(&mut self, reversed: bool) {
        self.list_reversed = reversed;
    }

    /// Overrides the log file.
    pub fn set_log_file(&mut self, log_file: PathBuf) {
        self.log_file = log_file;
    }

    /// Validated board dimensions.
    ///
    /// The error records the caller's location.
    #[track_caller]
    pub fn dimensions(&self) -> Result<Dimensions, ConfigError> {
        match Dimensions::new(self.columns, self.rows) {
            Ok(dimensions) => Ok(dimensions),
            Err(e) => Err(ConfigError::new(format!("Invalid board: {}", e))),
        }
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
