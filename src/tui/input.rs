//! Key bindings and cursor movement for keyboard navigation.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tictactoe_rules::{CELL_COUNT, Dimensions};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// User intent decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Switch focus between the board and the jump list.
    FocusNext,
    /// Move the focused cursor.
    Move(Direction),
    /// Activate whatever the focused cursor points at.
    Activate,
    /// Place a mark directly at a cell.
    Place(usize),
    /// Flip the jump list order.
    ToggleOrder,
    /// Jump one step back.
    StepBack,
    /// Jump one step forward.
    StepForward,
}

/// Maps a key event to an action. Releases and repeats are ignored.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Tab | KeyCode::BackTab => Action::FocusNext,
        KeyCode::Up => Action::Move(Direction::Up),
        KeyCode::Down => Action::Move(Direction::Down),
        KeyCode::Left => Action::Move(Direction::Left),
        KeyCode::Right => Action::Move(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('o') | KeyCode::Char('O') => Action::ToggleOrder,
        KeyCode::Char('[') | KeyCode::Char('u') => Action::StepBack,
        KeyCode::Char(']') => Action::StepForward,
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            if digit == 0 || digit > CELL_COUNT {
                return None;
            }
            Action::Place(digit - 1)
        }
        _ => return None,
    };
    Some(action)
}

/// Moves a board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: usize, direction: Direction, dimensions: Dimensions) -> usize {
    let columns = dimensions.columns();
    let column = cursor % columns;
    let row = cursor / columns;

    let (column, row) = match direction {
        Direction::Up => (column, row.saturating_sub(1)),
        Direction::Down => (column, row + 1),
        Direction::Left => (column.saturating_sub(1), row),
        Direction::Right => (column + 1, row),
    };
    dimensions.index(column, row).unwrap_or(cursor)
}
