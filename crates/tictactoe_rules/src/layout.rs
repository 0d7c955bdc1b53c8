//! Board dimensions and human-readable coordinates.

use tracing::instrument;

use crate::types::CELL_COUNT;

/// Grid dimensions for laying out a snapshot.
///
/// `columns * rows` always equals [`CELL_COUNT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    columns: usize,
    rows: usize,
}

impl Dimensions {
    /// The standard 3x3 board.
    pub const STANDARD: Dimensions = Dimensions { columns: 3, rows: 3 };

    /// Creates dimensions, rejecting grids that do not hold exactly
    /// [`CELL_COUNT`] cells.
    #[instrument]
    pub fn new(columns: usize, rows: usize) -> Result<Self, DimensionError> {
        if columns.checked_mul(rows) != Some(CELL_COUNT) {
            return Err(DimensionError::Mismatch { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flat index of the cell at zero-based `column` and `row`.
    pub fn index(&self, column: usize, row: usize) -> Option<usize> {
        (column < self.columns && row < self.rows).then_some(row * self.columns + column)
    }

    /// One-based coordinate of a flat index.
    pub fn coordinate(&self, index: usize) -> Option<Coordinate> {
        (index < CELL_COUNT).then(|| Coordinate {
            column: index % self.columns + 1,
            row: index / self.columns + 1,
        })
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One-based column and row of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}, {}", column, row)]
pub struct Coordinate {
    /// Column, starting at 1.
    pub column: usize,
    /// Row, starting at 1.
    pub row: usize,
}

/// Error building [`Dimensions`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DimensionError {
    /// The grid does not hold exactly one cell per snapshot entry.
    #[display(
        "{} columns x {} rows does not match {} cells",
        columns,
        rows,
        CELL_COUNT
    )]
    Mismatch {
        /// Requested columns.
        columns: usize,
        /// Requested rows.
        rows: usize,
    },
}

impl std::error::Error for DimensionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_dimensions() {
        let dims = Dimensions::new(3, 3).unwrap();
        assert_eq!(dims, Dimensions::STANDARD);
        assert_eq!(dims.index(2, 1), Some(5));
        assert_eq!(dims.index(3, 0), None);
    }

    #[test]
    fn test_mismatch_rejected() {
        assert_eq!(
            Dimensions::new(4, 3),
            Err(DimensionError::Mismatch { columns: 4, rows: 3 })
        );
        assert!(Dimensions::new(0, 9).is_err());
        assert!(Dimensions::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_coordinates() {
        let dims = Dimensions::STANDARD;
        assert_eq!(dims.coordinate(0), Some(Coordinate { column: 1, row: 1 }));
        assert_eq!(dims.coordinate(5), Some(Coordinate { column: 3, row: 2 }));
        assert_eq!(dims.coordinate(7).unwrap().to_string(), "2, 3");
        assert_eq!(dims.coordinate(9), None);
    }

    #[test]
    fn test_single_row_layout() {
        let dims = Dimensions::new(9, 1).unwrap();
        assert_eq!(dims.coordinate(4), Some(Coordinate { column: 5, row: 1 }));
    }
}
