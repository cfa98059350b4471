//! # FilterBar Component
//!
//! One-line selector for a closed set of options: `Category  ◀ Physics ▶  4/11`.
//! Stateless: the selected index is a prop, Left/Right emit the neighbour's index.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterEvent {
    Select(usize),
}

pub struct FilterBar<'a> {
    pub label: &'a str,
    pub options: Vec<&'a str>,
    pub selected: usize,
    pub focused: bool,
    /// Column width reserved for the label so stacked bars line up.
    pub label_width: usize,
}

impl<'a> FilterBar<'a> {
    pub fn new(label: &'a str, options: Vec<&'a str>, selected: usize, focused: bool) -> Self {
        Self {
            label,
            options,
            selected,
            focused,
            label_width: label.width(),
        }
    }

    pub fn label_width(mut self, width: usize) -> Self {
        self.label_width = width;
        self
    }
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let current = self.options.get(self.selected).copied().unwrap_or("");
        let (label_style, value_style, arrow_style) = if self.focused {
            (
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Cyan),
            )
        } else {
            (
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::White),
                Style::default().fg(Color::DarkGray),
            )
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {:<width$}  ", self.label, width = self.label_width),
                label_style,
            ),
            Span::styled("◀ ", arrow_style),
            Span::styled(format!(" {current} "), value_style),
            Span::styled(" ▶", arrow_style),
            Span::styled(
                format!("  {}/{}", self.selected + 1, self.options.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

impl EventHandler for FilterBar<'_> {
    type Event = FilterEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        let count = self.options.len();
        if count == 0 {
            return None;
        }
        match event {
            TuiEvent::CursorRight => Some(FilterEvent::Select((self.selected + 1) % count)),
            TuiEvent::CursorLeft => Some(FilterEvent::Select((self.selected + count - 1) % count)),
            _ => None,
        }
    }
}
