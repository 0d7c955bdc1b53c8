//! Pure tic-tac-toe rules.
//!
//! This crate holds the board snapshot type and the rules evaluator that
//! maps a snapshot to its winner, winning line and draw state. It has no
//! knowledge of history or rendering; the game controller and the terminal
//! UI build on top of it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod layout;
mod rules;
mod types;

pub use layout::{Coordinate, DimensionError, Dimensions};
pub use rules::{check_winner, evaluate, Evaluation, LINES};
pub use types::{Cell, Mark, ParseSnapshotError, Snapshot, CELL_COUNT};
