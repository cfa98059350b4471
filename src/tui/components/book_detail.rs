//! # BookDetail Component
//!
//! Full view of a single listing, including the fields the list omits
//! (category, status, contact). Receives the listing by reference from
//! `Screen::Detail`, which owns its own copy of the record.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Wrap};

use crate::core::listing::{BookListing, Status, Vocabulary};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const LABEL_WIDTH: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    Back,
}

const NO_CONTACT: &str = "-";

pub struct BookDetail<'a> {
    pub book: &'a BookListing,
    pub currency_symbol: &'a str,
}

impl<'a> BookDetail<'a> {
    pub fn new(book: &'a BookListing, currency_symbol: &'a str) -> Self {
        Self {
            book,
            currency_symbol,
        }
    }

    fn field(label: &str, value: impl Into<Span<'a>>) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("{:<width$}", label, width = LABEL_WIDTH),
                Style::default().fg(Color::DarkGray),
            ),
            value.into(),
        ])
    }
}

impl Component for BookDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let book = self.book;

        let price = match book.formatted_price(self.currency_symbol) {
            Some(price) => Span::styled(
                price,
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            None => Span::styled("Not for sale", Style::default().fg(Color::DarkGray)),
        };
        let status_color = match book.status {
            Status::Available => Color::Green,
            Status::Reserved => Color::Yellow,
            Status::Sold => Color::Red,
        };
        let contact = if book.contact.is_empty() {
            Span::styled(NO_CONTACT, Style::default().fg(Color::DarkGray))
        } else {
            Span::raw(book.contact.as_str())
        };

        let lines = vec![
            Line::from(Span::styled(
                book.title.as_str(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("by {}", book.author),
                Style::default().fg(Color::Gray),
            )),
            Line::default(),
            Self::field("Category", book.category.label()),
            Self::field("Condition", book.condition.label()),
            Self::field("Type", book.listing_type.label()),
            Self::field("Price", price),
            Self::field(
                "Status",
                Span::styled(book.status.label(), Style::default().fg(status_color)),
            ),
            Self::field("Contact", contact),
            Line::default(),
            Line::from(Span::styled(
                format!("Listing #{}", book.id),
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Listing ")
            .title_bottom(Line::from(" Esc Back ").centered())
            .padding(Padding::horizontal(1));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }
}

impl EventHandler for BookDetail<'_> {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace | TuiEvent::InputChar('q') => {
                Some(DetailEvent::Back)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{book, sample_books};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(book: &BookListing) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| BookDetail::new(book, "₹").render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_detail_shows_every_field() {
        let books = sample_books();
        let text = rendered(&books[0]);
        assert!(text.contains("Introduction to Algorithms"));
        assert!(text.contains("Cormen, Leiserson"));
        assert!(text.contains("Computer Science"));
        assert!(text.contains("Good"));
        assert!(text.contains("₹45"));
        assert!(text.contains("Available"));
        assert!(text.contains("john@example.com"));
    }

    #[test]
    fn test_unpriced_listing() {
        let books = sample_books();
        let text = rendered(&books[1]);
        assert!(text.contains("Not for sale"));
        assert!(!text.contains("₹0"));
        assert!(text.contains("Like New"));
        assert!(text.contains("Exchange"));
    }

    #[test]
    fn test_missing_contact_shows_dash() {
        let book = book("9", "Optics", "Hecht", Status::Reserved);
        let text = rendered(&book);
        assert!(text.contains(&format!("Contact    {NO_CONTACT}")));
        assert!(text.contains("Physics"));
        assert!(text.contains("Fair"));
        assert!(text.contains("Reserved"));
    }

    #[test]
    fn test_back_keys() {
        let books = sample_books();
        let mut detail = BookDetail::new(&books[0], "₹");
        assert_eq!(detail.handle_event(&TuiEvent::Escape), Some(DetailEvent::Back));
        assert_eq!(detail.handle_event(&TuiEvent::InputChar('q')), Some(DetailEvent::Back));
        assert_eq!(detail.handle_event(&TuiEvent::CursorDown), None);
    }
}
