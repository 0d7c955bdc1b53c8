//! Command-line interface.

use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use crate::config::{ConfigError, GameConfig};

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tictactoe_history")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board columns (columns x rows must be 9)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Board rows (columns x rows must be 9)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Show the move list newest first
    #[arg(long)]
    pub reversed: bool,

    /// Log file path
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Builds the effective configuration: file (or defaults), then flags.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<GameConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };

        config.set_board(self.columns, self.rows);
        if self.reversed {
            config.set_list_reversed(true);
        }
        if let Some(log_file) = &self.log_file {
            config.set_log_file(log_file.clone());
        }

        config.dimensions()?;
        Ok(config)
    }
}
