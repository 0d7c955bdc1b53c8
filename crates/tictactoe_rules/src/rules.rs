//! Win and draw evaluation.
//!
//! Rules are pure functions of a [`Snapshot`]. Nothing here is stored; the
//! controller re-evaluates the displayed snapshot every time it is asked.

use tracing::instrument;

use crate::types::{Mark, Snapshot};

/// The eight winning lines, in evaluation order.
///
/// When a snapshot somehow holds more than one complete line, the first one
/// in this list is reported.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of evaluating a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evaluation {
    winner: Option<Mark>,
    line: Option<[usize; 3]>,
    drawn: bool,
}

impl Evaluation {
    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<[usize; 3]> {
        self.line
    }

    /// True when the board is full and nobody won.
    pub fn is_drawn(&self) -> bool {
        self.drawn
    }

    /// Indices to highlight: the winning line, or nothing.
    pub fn highlights(&self) -> &[usize] {
        match &self.line {
            Some(line) => line.as_slice(),
            None => &[],
        }
    }

    /// True once the game can take no further moves.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some() || self.drawn
    }
}

/// Finds the first complete line and the mark that owns it.
#[instrument(level = "trace")]
pub fn check_winner(snapshot: &Snapshot) -> Option<(Mark, [usize; 3])> {
    LINES.into_iter().find_map(|line @ [a, b, c]| {
        let mark = snapshot.get(a)?.mark()?;
        let owned = |index| snapshot.get(index).and_then(|cell| cell.mark()) == Some(mark);
        (owned(b) && owned(c)).then_some((mark, line))
    })
}

/// Evaluates a snapshot.
///
/// A snapshot is drawn iff it has no empty cell and no winner.
#[instrument(level = "trace")]
pub fn evaluate(snapshot: &Snapshot) -> Evaluation {
    match check_winner(snapshot) {
        Some((winner, line)) => Evaluation {
            winner: Some(winner),
            line: Some(line),
            drawn: false,
        },
        None => Evaluation {
            winner: None,
            line: None,
            drawn: snapshot.is_full(),
        },
    }
}
