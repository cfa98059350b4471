//! # TitleBar Component
//!
//! Top status bar: app name, listing source, visible count, status message.
//!
//! Purely presentational. All fields are props:
//!
//! 1. **With status**: `"Bookswap (source: sample) | 2 listings | Filters cleared"`
//! 2. **Default**: `"Bookswap (source: sample) | 2 listings"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub source_name: &'a str,
    pub total: usize,
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(source_name: &'a str, total: usize, status_message: &'a str) -> Self {
        Self {
            source_name,
            total,
            status_message,
        }
    }

    fn text(&self) -> String {
        let noun = if self.total == 1 { "listing" } else { "listings" };
        let base = format!("Bookswap (source: {}) | {} {}", self.source_name, self.total, noun);
        if self.status_message.is_empty() {
            base
        } else {
            format!("{base} | {}", self.status_message)
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_without_status() {
        let bar = TitleBar::new("sample", 2, "");
        assert_eq!(bar.text(), "Bookswap (source: sample) | 2 listings");
    }

    #[test]
    fn test_title_with_status_and_singular() {
        let bar = TitleBar::new("books.json", 1, "0 of 1 listings");
        assert_eq!(
            bar.text(),
            "Bookswap (source: books.json) | 1 listing | 0 of 1 listings"
        );
    }
}
