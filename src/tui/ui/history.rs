//! Jump list rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::game::MoveEntry;

/// List of history jump entries, in display order.
#[derive(Debug, Clone, Copy)]
pub struct HistoryView<'a> {
    entries: &'a [MoveEntry],
    current: usize,
    selected: Option<usize>,
    reversed: bool,
}

impl<'a> HistoryView<'a> {
    /// Creates a history view. `current` is the displayed step.
    pub fn new(entries: &'a [MoveEntry], current: usize, reversed: bool) -> Self {
        Self {
            entries,
            current,
            selected: None,
            reversed,
        }
    }

    /// Sets the step under the keyboard cursor.
    pub fn selected(mut self, step: Option<usize>) -> Self {
        self.selected = step;
        self
    }

    /// Step of the entry drawn at terminal position `(x, y)`.
    pub fn entry_at(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = self.block().inner(area);
        if !inner.contains(Position::new(x, y)) {
            return None;
        }
        let row = usize::from(y - inner.y);
        let position = self.first_visible(inner.height) + row;
        self.entries.get(position).map(|entry| entry.step)
    }

    /// Display position of the first visible entry, so that the selected
    /// entry (or the displayed step when nothing is selected) stays on screen.
    fn first_visible(&self, height: u16) -> usize {
        let height = usize::from(height).max(1);
        let anchor = self.selected.unwrap_or(self.current);
        let selected = self
            .entries
            .iter()
            .position(|entry| entry.step == anchor)
            .unwrap_or(0);
        let max_offset = self.entries.len().saturating_sub(height);
        selected.saturating_sub(height - 1).min(max_offset)
    }

    fn block(&self) -> Block<'static> {
        let title = if self.reversed {
            " History (newest first) "
        } else {
            " History "
        };
        Block::bordered().title(title)
    }
}

impl Widget for &HistoryView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .entries
            .iter()
            .skip(self.first_visible(inner.height))
            .take(usize::from(inner.height))
            .map(|entry| {
                let mut style = Style::default();
                if entry.step == self.current {
                    style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
                }
                if Some(entry.step) == self.selected {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::from(vec![
                    Span::styled(format!("{:>2}. ", entry.step + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(entry.label.clone(), style),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
