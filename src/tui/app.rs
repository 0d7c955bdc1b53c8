//! Application state and event dispatch.

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::{debug, instrument, warn};

use super::input::{Action, Direction, action_for, move_cursor};
use super::ui::{BoardView, HistoryView, ScreenLayout};
use crate::game::{Game, MoveError};

/// Which pane receives cursor keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The jump list.
    History,
}

/// Main application state.
///
/// Owns the game controller plus the UI-only state around it: cursors,
/// focus, and whether the user asked to quit.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    cursor: usize,
    history_cursor: usize,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Creates an application around a game.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        let history_cursor = game.step();
        Self {
            game,
            cursor: 0,
            history_cursor,
            focus: Focus::Board,
            should_quit: false,
        }
    }

    /// The game controller.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor cell.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Step under the jump list cursor.
    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Whether the event loop should stop.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a terminal event. `area` is the full frame area.
    pub fn handle_event(&mut self, event: Event, area: Rect) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse, area),
            _ => {}
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = action_for(key) {
            self.apply(action);
        }
    }

    /// Handles a mouse event. Only left clicks do anything.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);
        let layout = ScreenLayout::new(area);

        let mut clicked_cell = None;
        BoardView::new(self.game.current(), &[], self.game.dimensions())
            .dispatch_click(layout.board, x, y, |index| clicked_cell = Some(index));
        if let Some(index) = clicked_cell {
            self.focus = Focus::Board;
            self.cursor = index;
            self.place(index);
            return;
        }

        if layout.order_button.contains(Position::new(x, y)) {
            self.game.toggle_list_order();
            return;
        }

        let entries = self.game.moves();
        let selected = (self.focus == Focus::History).then_some(self.history_cursor);
        let history = HistoryView::new(&entries, self.game.step(), self.game.is_list_reversed())
            .selected(selected);
        if let Some(step) = history.entry_at(layout.history, x, y) {
            self.focus = Focus::History;
            self.jump(step);
        }
    }

    /// Applies a decoded action.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::FocusNext => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.history_cursor = self.game.step();
            }
            Action::Move(direction) => match self.focus {
                Focus::Board => {
                    self.cursor = move_cursor(self.cursor, direction, self.game.dimensions());
                }
                Focus::History => self.move_history_cursor(direction),
            },
            Action::Activate => match self.focus {
                Focus::Board => self.place(self.cursor),
                Focus::History => self.jump(self.history_cursor),
            },
            Action::Place(index) => {
                self.cursor = index;
                self.place(index);
            }
            Action::ToggleOrder => self.game.toggle_list_order(),
            Action::StepBack => {
                if self.game.step_back().is_ok() {
                    self.history_cursor = self.game.step();
                }
            }
            Action::StepForward => {
                if self.game.step_forward().is_ok() {
                    self.history_cursor = self.game.step();
                }
            }
        }
    }

    fn place(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(()) => self.history_cursor = self.game.step(),
            Err(e @ (MoveError::Occupied(_) | MoveError::GameOver)) => {
                debug!(error = %e, "Move ignored");
            }
            Err(e @ MoveError::OutOfRange(_)) => warn!(error = %e, "Move rejected"),
        }
    }

    fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(()) => self.history_cursor = step,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Moves the jump list cursor in display order.
    fn move_history_cursor(&mut self, direction: Direction) {
        let entries = self.game.moves();
        let Some(position) = entries
            .iter()
            .position(|entry| entry.step == self.history_cursor)
        else {
            self.history_cursor = self.game.step();
            return;
        };
        let position = match direction {
            Direction::Up => position.saturating_sub(1),
            Direction::Down => (position + 1).min(entries.len() - 1),
            Direction::Left | Direction::Right => position,
        };
        self.history_cursor = entries[position].step;
    }
}
