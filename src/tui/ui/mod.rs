//! UI rendering using ratatui.

mod board;
mod history;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

use super::app::{App, Focus};

pub use board::{BoardView, CELL_HEIGHT, CELL_WIDTH, center_rect};
pub use history::HistoryView;

/// Label of the list order button.
pub const ORDER_BUTTON: &str = "[ change list order ]";

/// Key help shown in the footer.
pub const HELP: &str = "1-9/Enter: Move | Tab: Focus | O: Order | [/U: Back | ]: Fwd | Q: Quit";

/// Screen regions, computed the same way for drawing and for mouse hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered frame around the board.
    pub board_frame: Rect,
    /// Area the board grid is centered in.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// List order button.
    pub order_button: Rect,
    /// Jump list.
    pub history: Rect,
    /// Coordinate of the last move.
    pub coordinate: Rect,
    /// Key help.
    pub help: Rect,
}

impl ScreenLayout {
    /// Splits the full frame area.
    pub fn new(area: Rect) -> Self {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .areas(area);

        let [board_frame, info] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(34)]).areas(body);

        let [status, order_button, history, coordinate] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(info);

        Self {
            title,
            board_frame,
            board: Block::bordered().inner(board_frame),
            status,
            order_button: center_rect(order_button, ORDER_BUTTON.len() as u16, 1),
            history,
            coordinate,
            help,
        }
    }
}

/// Draws the whole application.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::new(frame.area());
    let game = app.game();

    let title = Paragraph::new("Tic Tac Toe - Time Travel")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(title, layout.title);

    let focus_style = |focus: Focus| {
        if app.focus() == focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let board_block = Block::bordered()
        .title(" Board ")
        .border_style(focus_style(Focus::Board));
    frame.render_widget(board_block, layout.board_frame);

    let evaluation = game.evaluation();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    let board = BoardView::new(game.current(), evaluation.highlights(), game.dimensions())
        .cursor(cursor);
    frame.render_widget(&board, layout.board);

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Status "));
    frame.render_widget(status, layout.status);

    let button = Paragraph::new(ORDER_BUTTON).style(Style::default().fg(Color::Magenta));
    frame.render_widget(button, layout.order_button);

    let entries = game.moves();
    let selected = (app.focus() == Focus::History).then_some(app.history_cursor());
    let history = HistoryView::new(&entries, game.step(), game.is_list_reversed()).selected(selected);
    frame.render_widget(&history, layout.history);

    if let Some(coordinate) = game.changed_coordinate() {
        let text = Paragraph::new(format!("current step: {}", coordinate))
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(text, layout.coordinate);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(help, layout.help);
}
