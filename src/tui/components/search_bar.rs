//! # SearchBar Component
//!
//! A controlled text field: an icon followed by the current query.
//!
//! ## State Management
//!
//! The search bar owns no text. `value` is a prop from `App.filter`, and
//! every edit produces `SearchEvent::Changed` with the complete new string.
//! Nothing changes on screen until the parent applies that string and passes
//! it back in as the next `value`:
//!
//! ```text
//! keystroke → SearchBar::handle_event → Changed(new) → Action::SetSearchQuery
//!                 ▲                                              │
//!                 └──────────── value (next frame) ◄─────────────┘
//! ```
//!
//! No debouncing, trimming, or validation happens here.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";
const ICON: &str = "⌕ ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// The full text after the edit.
    Changed(String),
}

pub struct SearchBar<'a> {
    pub value: &'a str,
    pub placeholder: Option<&'a str>,
    pub focused: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            placeholder: None,
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Component for SearchBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let icon = Span::styled(ICON, Style::default().fg(Color::DarkGray));
        let field = if self.value.is_empty() {
            Span::styled(
                self.placeholder.unwrap_or(DEFAULT_PLACEHOLDER),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.value)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        // Scroll so the end of the query and the cursor after it stay in view
        let inner_width = usize::from(area.width.saturating_sub(2));
        let content_width = ICON.width() + self.value.width();
        let overflow = (content_width + 1).saturating_sub(inner_width);
        let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

        frame.render_widget(
            Paragraph::new(Line::from(vec![icon, field]))
                .block(block)
                .scroll((0, scroll)),
            area,
        );

        if self.focused && inner_width > 0 {
            let column = u16::try_from(content_width.saturating_sub(overflow)).unwrap_or(u16::MAX);
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let x = area.x.saturating_add(1).saturating_add(column).min(max_x);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }
}

impl EventHandler for SearchBar<'_> {
    type Event = SearchEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                let mut text = self.value.to_string();
                text.push(*c);
                Some(SearchEvent::Changed(text))
            }
            TuiEvent::Paste(pasted) => {
                // Single-line field
                let pasted = pasted.replace(['\r', '\n'], " ");
                Some(SearchEvent::Changed(format!("{}{}", self.value, pasted)))
            }
            TuiEvent::Backspace => {
                let mut chars = self.value.chars();
                chars.next_back()?;
                Some(SearchEvent::Changed(chars.as_str().to_string()))
            }
            _ => None,
        }
    }
}
