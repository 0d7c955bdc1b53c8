//! Tic-tac-toe board rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph, Widget},
};
use tictactoe_rules::{Cell, Dimensions, Mark, Snapshot};

/// Width of one cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Grid of cells for one snapshot.
///
/// Cells whose index is in `highlights` are drawn highlighted. The board
/// holds no state; clicks are resolved against the same geometry that
/// rendering uses.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    snapshot: &'a Snapshot,
    highlights: &'a [usize],
    dimensions: Dimensions,
    cursor: Option<usize>,
}

impl<'a> BoardView<'a> {
    /// Creates a board view.
    pub fn new(snapshot: &'a Snapshot, highlights: &'a [usize], dimensions: Dimensions) -> Self {
        Self {
            snapshot,
            highlights,
            dimensions,
            cursor: None,
        }
    }

    /// Sets the keyboard cursor cell.
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Rectangle of the cell at `index` when the board is drawn in `area`.
    pub fn cell_rect(&self, area: Rect, index: usize) -> Option<Rect> {
        let columns = self.dimensions.columns();
        if index >= columns * self.dimensions.rows() {
            return None;
        }
        let (width, height) = self.cell_size(area);
        let grid = self.grid(area);
        let column = u16::try_from(index % columns).ok()?;
        let row = u16::try_from(index / columns).ok()?;
        let cell = Rect::new(
            grid.x + column * width,
            grid.y + row * height,
            width,
            height,
        );
        Some(cell.intersection(area)).filter(|rect| !rect.is_empty())
    }

    /// Index of the cell under the terminal position `(x, y)`.
    pub fn cell_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        (0..self.snapshot.cells().len()).find(|&index| {
            self.cell_rect(area, index)
                .is_some_and(|rect| rect.contains(Position::new(x, y)))
        })
    }

    /// Calls `on_click` with the index of the cell under `(x, y)`, if any.
    ///
    /// Returns whether a cell was hit.
    pub fn dispatch_click(&self, area: Rect, x: u16, y: u16, on_click: impl FnOnce(usize)) -> bool {
        match self.cell_at(area, x, y) {
            Some(index) => {
                on_click(index);
                true
            }
            None => false,
        }
    }

    /// Cell size in `area`: shrinks from [`CELL_WIDTH`] x [`CELL_HEIGHT`]
    /// so the whole grid fits, never below 1x1.
    pub fn cell_size(&self, area: Rect) -> (u16, u16) {
        let columns = u16::try_from(self.dimensions.columns()).unwrap_or(u16::MAX);
        let rows = u16::try_from(self.dimensions.rows()).unwrap_or(u16::MAX);
        let width = (area.width / columns).clamp(1, CELL_WIDTH);
        let height = (area.height / rows).clamp(1, CELL_HEIGHT);
        (width, height)
    }

    fn grid(&self, area: Rect) -> Rect {
        let (width, height) = self.cell_size(area);
        let columns = self.dimensions.columns() as u16;
        let rows = self.dimensions.rows() as u16;
        center_rect(area, width.saturating_mul(columns), height.saturating_mul(rows))
    }
}

impl Widget for &BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (index, cell) in self.snapshot.cells().iter().enumerate() {
            let Some(rect) = self.cell_rect(area, index) else {
                continue;
            };
            render_cell(
                buf,
                rect,
                *cell,
                self.highlights.contains(&index),
                self.cursor == Some(index),
            );
        }
    }
}

fn render_cell(buf: &mut Buffer, area: Rect, cell: Cell, highlighted: bool, under_cursor: bool) {
    let mark_style = match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::Occupied(Mark::X) => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Cell::Occupied(Mark::O) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };

    let (block_style, mark_style) = if highlighted {
        (
            Style::default().bg(Color::Green),
            mark_style.fg(Color::Black),
        )
    } else {
        (Style::default(), mark_style)
    };

    let border_style = if under_cursor {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Too small for borders: fill the cell and mark the cursor by reversing.
    if area.width < 3 || area.height < 3 {
        let mark_style = if under_cursor {
            mark_style.add_modifier(Modifier::REVERSED)
        } else {
            mark_style
        };
        buf.set_style(area, block_style);
        let inner = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        Paragraph::new(cell.symbol())
            .style(mark_style)
            .alignment(Alignment::Center)
            .render(inner, buf);
        return;
    }

    let block = Block::bordered().border_style(border_style).style(block_style);
    let inner = block.inner(area);
    block.render(area, buf);

    Paragraph::new(cell.symbol())
        .style(mark_style)
        .alignment(Alignment::Center)
        .render(inner, buf);
}

/// Centers a `width` x `height` rectangle inside `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
