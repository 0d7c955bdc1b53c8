//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use strum::{Display, EnumIter};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Returns the mark that moves next once `step` moves have been played.
    ///
    /// X moves on even steps, O on odd ones.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No mark placed.
    #[default]
    Empty,
    /// Cell holds a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Text shown for this cell; blank when empty.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Mark::X) => "X",
            Cell::Occupied(Mark::O) => "O",
        }
    }
}

/// One immutable board state, cells in row-major order.
///
/// Snapshots are never edited in place. [`Snapshot::with_mark`] returns a
/// copy with exactly one cell changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    cells: [Cell; CELL_COUNT],
}

impl Snapshot {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a snapshot from raw cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `index`, or `None` when out of bounds.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if the cell at `index` exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns a copy with `mark` placed at `index`.
    ///
    /// Returns `None` if `index` is out of bounds. Occupancy is not checked
    /// here; the caller decides whether overwriting is legal.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        let mut next = *self;
        let cell = next.cells.get_mut(index)?;
        *cell = Cell::Occupied(mark);
        Some(next)
    }

    /// First index at which `self` and `other` differ.
    pub fn first_difference(&self, other: &Snapshot) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }
}

/// Error parsing a snapshot from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseSnapshotError {
    /// Wrong number of cell characters.
    #[display("Expected {} cells, found {}", CELL_COUNT, _0)]
    WrongLength(usize),

    /// Character that is not `X`, `O`, `.` or `-`.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for ParseSnapshotError {}

/// Parses nine cell characters (`X`, `O`, and `.` or `-` for empty).
/// Whitespace and `|` separators are ignored.
impl FromStr for Snapshot {
    type Err = ParseSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(ParseSnapshotError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' => Cell::Empty,
                other => return Err(ParseSnapshotError::InvalidCell(other)),
            };
        }
        Ok(Self { cells })
    }
}
