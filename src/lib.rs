//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation in the `tictactoe_rules` crate
//! - **Game**: controller owning the history and step pointer
//! - **TUI**: board and jump list rendered with ratatui
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```
//! use tictactoe_history::{Game, Status};
//! use tictactoe_rules::Mark;
//!
//! let mut game = Game::new();
//! game.apply_move(4)?;
//! assert_eq!(game.status(), Status::NextPlayer(Mark::O));
//!
//! game.jump_to(0)?;
//! assert_eq!(game.status(), Status::NextPlayer(Mark::X));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod game;
mod tui;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use game::{Game, JumpError, MoveEntry, MoveError, Status};
pub use tui::{
    Action, App, BoardView, CELL_HEIGHT, CELL_WIDTH, Direction, Focus, HELP, HistoryView,
    ORDER_BUTTON, ScreenLayout, action_for, draw, move_cursor, run_tui,
};

pub use tictactoe_rules::{Cell, Coordinate, Dimensions, Evaluation, Mark, Snapshot};
