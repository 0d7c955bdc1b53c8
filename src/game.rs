//! Game controller: move history, step pointer and time travel.
//!
//! The controller is the only owner of mutable game state. Everything the
//! UI displays (status line, highlighted line, last-move coordinate, jump
//! list) is derived on demand from the history and the step pointer.

use tictactoe_rules::{
    CELL_COUNT, Coordinate, Dimensions, Evaluation, Mark, Snapshot, evaluate,
};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game with time travel.
///
/// Invariants:
/// - `history` is never empty and starts with an empty snapshot
/// - `step < history.len()`
/// - each snapshot after the first differs from its predecessor in one cell
#[derive(Debug, Clone)]
pub struct Game {
    history: Vec<Snapshot>,
    step: usize,
    dimensions: Dimensions,
    list_reversed: bool,
}

impl Game {
    /// Creates a new game on a standard 3x3 board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_dimensions(Dimensions::STANDARD)
    }

    /// Creates a new game laid out with the given dimensions.
    #[instrument]
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            history: vec![Snapshot::new()],
            step: 0,
            dimensions,
            list_reversed: false,
        }
    }

    /// Sets the initial list order.
    pub fn with_list_reversed(mut self, reversed: bool) -> Self {
        self.list_reversed = reversed;
        self
    }

    /// Returns all recorded snapshots.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Returns the step pointer.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the board dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Whether the jump list is displayed newest first.
    pub fn is_list_reversed(&self) -> bool {
        self.list_reversed
    }

    /// The snapshot at the step pointer.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.step]
    }

    /// The mark that moves next. X on even steps.
    pub fn next_mark(&self) -> Mark {
        Mark::for_step(self.step)
    }

    /// Places the next mark at `index`.
    ///
    /// Any moves after the step pointer are discarded first, so making a
    /// move after jumping back starts a new branch.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index` is not a cell
    /// - [`MoveError::GameOver`] if the displayed snapshot already has a winner
    /// - [`MoveError::Occupied`] if the cell is taken
    ///
    /// State is unchanged on error.
    #[instrument(skip(self), fields(step = self.step, mark = %self.next_mark()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }

        let current = *self.current();
        if evaluate(&current).winner().is_some() {
            return Err(MoveError::GameOver);
        }
        if !current.is_empty_at(index) {
            return Err(MoveError::Occupied(index));
        }

        let next = current
            .with_mark(index, self.next_mark())
            .ok_or(MoveError::OutOfRange(index))?;

        let discarded = self.history.len() - (self.step + 1);
        if discarded > 0 {
            debug!(discarded, "Discarding future moves");
        }
        self.history.truncate(self.step + 1);
        self.history.push(next);
        self.step = self.history.len() - 1;

        info!(step = self.step, "Move applied");
        Ok(())
    }

    /// Moves the step pointer to `step`.
    ///
    /// # Errors
    ///
    /// Returns [`JumpError::OutOfRange`] if `step` is past the last entry.
    #[instrument(skip(self), fields(from = self.step))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpError> {
        if step >= self.history.len() {
            return Err(JumpError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.step = step;
        debug!("Jumped");
        Ok(())
    }

    /// Jumps one step back.
    pub fn step_back(&mut self) -> Result<(), JumpError> {
        let target = self.step.checked_sub(1).ok_or(JumpError::OutOfRange {
            step: 0,
            len: self.history.len(),
        })?;
        self.jump_to(target)
    }

    /// Jumps one step forward.
    pub fn step_forward(&mut self) -> Result<(), JumpError> {
        self.jump_to(self.step + 1)
    }

    /// Flips the jump list display order.
    #[instrument(skip(self))]
    pub fn toggle_list_order(&mut self) {
        self.list_reversed = !self.list_reversed;
        debug!(reversed = self.list_reversed, "Toggled list order");
    }

    /// Evaluates the displayed snapshot.
    pub fn evaluation(&self) -> Evaluation {
        evaluate(self.current())
    }

    /// Status of the displayed snapshot.
    pub fn status(&self) -> Status {
        let evaluation = self.evaluation();
        match evaluation.winner() {
            Some(winner) => Status::Winner(winner),
            None if evaluation.is_drawn() => Status::Draw,
            None => Status::NextPlayer(self.next_mark()),
        }
    }

    /// Index of the cell changed by the move that produced the displayed
    /// snapshot. `None` at game start.
    pub fn changed_index(&self) -> Option<usize> {
        let previous = self.history.get(self.step.checked_sub(1)?)?;
        previous.first_difference(self.current())
    }

    /// One-based coordinate of [`Game::changed_index`].
    pub fn changed_coordinate(&self) -> Option<Coordinate> {
        self.dimensions.coordinate(self.changed_index()?)
    }

    /// Jump list entries in display order.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let mut moves: Vec<MoveEntry> = (0..self.history.len()).map(MoveEntry::new).collect();
        if self.list_reversed {
            moves.reverse();
        }
        moves
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Status line of the displayed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Mark),
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Mark),
}

/// One entry of the jump list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History index this entry jumps to.
    pub step: usize,
    /// Display label.
    pub label: String,
}

impl MoveEntry {
    fn new(step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", step)
        };
        Self { step, label }
    }
}

/// Error applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The displayed snapshot already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// The index does not name a cell.
    #[display("Cell {} is out of range (must be 0-{})", _0, CELL_COUNT - 1)]
    OutOfRange(usize),
}

impl std::error::Error for MoveError {}

/// Error moving the step pointer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JumpError {
    /// The step is not in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

impl std::error::Error for JumpError {}
