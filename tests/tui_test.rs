//! Tests for board rendering and event dispatch in the terminal UI.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use tictactoe_history::{
    App, BoardView, CELL_HEIGHT, CELL_WIDTH, Dimensions, Focus, Game, HELP, Mark, ScreenLayout,
    Snapshot, Status,
};

const SCREEN: Rect = Rect {
    x: 0,
    y: 0,
    width: 80,
    height: 30,
};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

/// Center of the cell at `index` as drawn on `SCREEN`.
fn cell_center(app: &App, index: usize) -> (u16, u16) {
    let layout = ScreenLayout::new(SCREEN);
    let board = BoardView::new(app.game().current(), &[], app.game().dimensions());
    let rect = board.cell_rect(layout.board, index).unwrap();
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn test_board_renders_marks_in_cells() {
    let snapshot: Snapshot = "X.. .O. ...".parse().unwrap();
    let area = Rect::new(0, 0, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let view = BoardView::new(&snapshot, &[], Dimensions::STANDARD);
    let mut buf = Buffer::empty(area);
    (&view).render(area, &mut buf);

    assert_eq!(buf[(3u16, 1u16)].symbol(), "X");
    assert_eq!(buf[(10u16, 4u16)].symbol(), "O");
    assert_eq!(buf[(17u16, 7u16)].symbol(), " ");
}

#[test]
fn test_board_highlights_only_listed_cells() {
    let snapshot: Snapshot = "XXX OO. ...".parse().unwrap();
    let area = Rect::new(0, 0, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let highlights = [0, 1, 2];
    let view = BoardView::new(&snapshot, &highlights, Dimensions::STANDARD);
    let mut buf = Buffer::empty(area);
    (&view).render(area, &mut buf);

    assert_eq!(buf[(3u16, 1u16)].bg, Color::Green);
    assert_eq!(buf[(17u16, 1u16)].bg, Color::Green);
    assert_ne!(buf[(3u16, 4u16)].bg, Color::Green);
}

#[test]
fn test_board_hit_testing() {
    let snapshot = Snapshot::new();
    let area = Rect::new(10, 5, 40, 20);
    let view = BoardView::new(&snapshot, &[], Dimensions::STANDARD);

    for index in 0..9 {
        let rect = view.cell_rect(area, index).unwrap();
        assert_eq!(view.cell_at(area, rect.x, rect.y), Some(index));
        assert_eq!(
            view.cell_at(area, rect.right() - 1, rect.bottom() - 1),
            Some(index)
        );
    }
    assert_eq!(view.cell_at(area, 10, 5), None);

    let mut clicked = None;
    let rect = view.cell_rect(area, 7).unwrap();
    assert!(view.dispatch_click(area, rect.x + 1, rect.y + 1, |i| clicked = Some(i)));
    assert_eq!(clicked, Some(7));
}

#[test]
fn test_single_row_board_geometry() {
    let snapshot = Snapshot::new();
    let dims = Dimensions::new(9, 1).unwrap();
    let area = Rect::new(0, 0, CELL_WIDTH * 9, CELL_HEIGHT);
    let view = BoardView::new(&snapshot, &[], dims);
    assert_eq!(view.cell_rect(area, 8), Some(Rect::new(CELL_WIDTH * 8, 0, CELL_WIDTH, CELL_HEIGHT)));
}

#[test]
fn test_keyboard_play() {
    let mut app = App::new(Game::new());
    app.handle_key(key(KeyCode::Char('5')));
    assert_eq!(app.game().current().get(4).and_then(|c| c.mark()), Some(Mark::X));

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.game().current().get(1).and_then(|c| c.mark()), Some(Mark::O));
    assert_eq!(app.cursor(), 1);

    // Occupied cell is ignored.
    app.handle_key(key(KeyCode::Char('5')));
    assert_eq!(app.game().history().len(), 3);
}

#[test]
fn test_history_navigation_jumps() {
    let mut app = App::new(Game::new());
    for c in ['1', '5', '2'] {
        app.handle_key(key(KeyCode::Char(c)));
    }

    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.focus(), Focus::History);
    assert_eq!(app.history_cursor(), 3);

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Enter));
    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().status(), Status::NextPlayer(Mark::O));

    // Reversed order flips the meaning of Up/Down.
    app.handle_key(key(KeyCode::Char('o')));
    app.handle_key(key(KeyCode::Up));
    assert_eq!(app.history_cursor(), 2);
}

#[test]
fn test_step_keys() {
    let mut app = App::new(Game::new());
    app.handle_key(key(KeyCode::Char('1')));
    app.handle_key(key(KeyCode::Char('2')));
    app.handle_key(key(KeyCode::Char('[')));
    assert_eq!(app.game().step(), 1);
    app.handle_key(key(KeyCode::Char(']')));
    assert_eq!(app.game().step(), 2);
    app.handle_key(key(KeyCode::Char(']')));
    assert_eq!(app.game().step(), 2);
}

#[test]
fn test_quit() {
    let mut app = App::new(Game::new());
    assert!(!app.should_quit());
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit());
}

#[test]
fn test_mouse_click_places_mark() {
    let mut app = App::new(Game::new());
    let (x, y) = cell_center(&app, 8);
    app.handle_event(click(x, y), SCREEN);
    assert_eq!(app.game().current().get(8).and_then(|c| c.mark()), Some(Mark::X));
    assert_eq!(app.cursor(), 8);
}

#[test]
fn test_mouse_click_on_history_jumps() {
    let mut app = App::new(Game::new());
    for c in ['1', '5'] {
        app.handle_key(key(KeyCode::Char(c)));
    }
    let layout = ScreenLayout::new(SCREEN);
    // First row inside the border is "Go to game start".
    app.handle_event(click(layout.history.x + 3, layout.history.y + 1), SCREEN);
    assert_eq!(app.game().step(), 0);
    assert_eq!(app.focus(), Focus::History);
}

#[test]
fn test_mouse_click_on_order_button() {
    let mut app = App::new(Game::new());
    let layout = ScreenLayout::new(SCREEN);
    app.handle_event(click(layout.order_button.x, layout.order_button.y), SCREEN);
    assert!(app.game().is_list_reversed());
}

#[test]
fn test_full_screen_draw() {
    let backend = ratatui::backend::TestBackend::new(SCREEN.width, SCREEN.height);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    let mut app = App::new(Game::new());
    for c in ['1', '5', '2', '4', '3'] {
        app.handle_key(key(KeyCode::Char(c)));
    }

    terminal.draw(|f| tictactoe_history::draw(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();
    let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
    assert!(text.contains("Winner: X"));
    assert!(text.contains("Go to move #5"));
    assert!(text.contains("current step: 3, 1"));
}

/// Draws a game on a standard 80x24 terminal after pressing `9`, and checks
/// every cell is on screen and the placed mark is visible.
fn assert_layout_fits_standard_terminal(dimensions: Dimensions) {
    let screen = Rect::new(0, 0, 80, 24);
    let mut app = App::new(Game::with_dimensions(dimensions));
    app.handle_key(key(KeyCode::Char('9')));
    assert_eq!(app.game().current().get(8).and_then(|c| c.mark()), Some(Mark::X));

    let layout = ScreenLayout::new(screen);
    let board = BoardView::new(app.game().current(), &[], dimensions);
    let rects: Vec<Rect> = (0..9)
        .map(|index| {
            board
                .cell_rect(layout.board, index)
                .unwrap_or_else(|| panic!("cell {index} has no rect for {dimensions:?}"))
        })
        .collect();
    for (index, rect) in rects.iter().enumerate() {
        assert_eq!(board.cell_at(layout.board, rect.x, rect.y), Some(index));
    }

    let backend = ratatui::backend::TestBackend::new(screen.width, screen.height);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(|f| tictactoe_history::draw(f, &app)).unwrap();
    let buffer = terminal.backend().buffer();

    let last = rects[8];
    let shows_x = (last.y..last.bottom())
        .flat_map(|y| (last.x..last.right()).map(move |x| (x, y)))
        .any(|(x, y)| buffer[(x, y)].symbol() == "X");
    assert!(shows_x, "mark at cell 8 not drawn for {dimensions:?}");
}

#[test]
fn test_single_row_board_fits_standard_terminal() {
    assert_layout_fits_standard_terminal(Dimensions::new(9, 1).unwrap());
}

#[test]
fn test_single_column_board_fits_standard_terminal() {
    assert_layout_fits_standard_terminal(Dimensions::new(1, 9).unwrap());
}

#[test]
fn test_cells_shrink_to_fit() {
    let snapshot = Snapshot::new();
    let area = Rect::new(0, 0, 44, 16);
    let standard = BoardView::new(&snapshot, &[], Dimensions::STANDARD);
    assert_eq!(standard.cell_size(area), (CELL_WIDTH, CELL_HEIGHT));

    let row = BoardView::new(&snapshot, &[], Dimensions::new(9, 1).unwrap());
    assert_eq!(row.cell_size(area), (4, CELL_HEIGHT));

    let column = BoardView::new(&snapshot, &[], Dimensions::new(1, 9).unwrap());
    assert_eq!(column.cell_size(area), (CELL_WIDTH, 1));
}

#[test]
fn test_help_lists_step_keys() {
    let backend = ratatui::backend::TestBackend::new(SCREEN.width, SCREEN.height);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    let app = App::new(Game::new());
    terminal.draw(|f| tictactoe_history::draw(f, &app)).unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect();
    assert!(text.contains(HELP));
    assert!(HELP.contains("[/U: Back"));
}
