//! # HelpBar Component
//!
//! Bottom line of key hints. The caller picks the hints for the current
//! screen and focus; this only draws them.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

pub struct HelpBar<'a> {
    /// `(key, action)` pairs in display order.
    pub hints: &'a [(&'a str, &'a str)],
}

impl<'a> HelpBar<'a> {
    pub fn new(hints: &'a [(&'a str, &'a str)]) -> Self {
        Self { hints }
    }

    fn line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 2);
        for (key, what) in self.hints {
            spans.push(Span::styled(format!(" {key}"), Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(format!(" {what} "), Style::default().fg(Color::DarkGray)));
        }
        Line::from(spans)
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_in_order() {
        let bar = HelpBar::new(&[("Esc", "Back"), ("Ctrl+C", "Quit")]);
        assert_eq!(bar.line().to_string(), " Esc Back  Ctrl+C Quit ");
    }

    #[test]
    fn test_no_hints_is_blank() {
        let bar = HelpBar::new(&[]);
        assert_eq!(bar.line().to_string(), "");
    }
}
