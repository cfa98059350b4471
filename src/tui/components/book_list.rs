//! # BookList Component
//!
//! Scrollable list of the listings that pass the current filter.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `BookListState` lives in `TuiState` (selection survives redraws)
//! - `BookList` is created each frame with borrowed state and props
//!
//! Each row:
//!
//! ```text
//! ▌ Introduction to Algorithms
//!   Cormen, Leiserson
//!    Good   Sale                              ₹45
//! ```
//!
//! The price is omitted entirely when it is 0.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::listing::BookListing;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const EMPTY_MESSAGE: &str = "No books found";

/// Rows moved by PageUp / PageDown.
const PAGE_STEP: usize = 5;

const HIGHLIGHT_SYMBOL: &str = "▌ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookListEvent {
    /// Open the listing at this index of the filtered list.
    Open(usize),
}

/// Persistent selection for the book list.
#[derive(Debug, Default)]
pub struct BookListState {
    pub list_state: ListState,
    len: usize,
}

impl BookListState {
    pub fn new(len: usize) -> Self {
        let mut state = Self::default();
        state.reset(len);
        state
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Back to the first row of a list with `len` rows.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.list_state = ListState::default();
        if len > 0 {
            self.list_state.select(Some(0));
        }
    }

    /// Keep the selection but clamp it to a list with `len` rows.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        let selected = match (self.list_state.selected(), len) {
            (_, 0) => None,
            (Some(i), _) => Some(i.min(len - 1)),
            (None, _) => Some(0),
        };
        self.list_state.select(selected);
    }

    fn move_by(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let target = (current + delta).clamp(0, self.len as isize - 1);
        self.list_state.select(Some(target as usize));
    }
}

impl EventHandler for BookListState {
    type Event = BookListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.move_by(-1),
            TuiEvent::CursorDown => self.move_by(1),
            TuiEvent::PageUp => self.move_by(-(PAGE_STEP as isize)),
            TuiEvent::PageDown => self.move_by(PAGE_STEP as isize),
            TuiEvent::Home => self.move_by(-(self.len as isize)),
            TuiEvent::End => self.move_by(self.len as isize),
            TuiEvent::Submit => return self.selected().map(BookListEvent::Open),
            _ => {}
        }
        None
    }
}

/// Transient render wrapper for the book list.
pub struct BookList<'a> {
    state: &'a mut BookListState,
    books: &'a [&'a BookListing],
    currency_symbol: &'a str,
    focused: bool,
}

impl<'a> BookList<'a> {
    pub fn new(
        state: &'a mut BookListState,
        books: &'a [&'a BookListing],
        currency_symbol: &'a str,
        focused: bool,
    ) -> Self {
        Self {
            state,
            books,
            currency_symbol,
            focused,
        }
    }
}

impl Component for BookList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Filtered length may have changed since the last event
        self.state.set_len(self.books.len());

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!(" Listings ({}) ", self.books.len()));

        if self.books.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + highlight symbol
        let row_width = (area.width as usize).saturating_sub(2 + HIGHLIGHT_SYMBOL.width());
        let items: Vec<ListItem> = self
            .books
            .iter()
            .map(|book| book_row(book, self.currency_symbol, row_width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_symbol(HIGHLIGHT_SYMBOL)
            .highlight_style(Style::default().bg(Color::Rgb(40, 40, 48)));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

fn book_row<'a>(book: &'a BookListing, currency_symbol: &str, width: usize) -> ListItem<'a> {
    let title = Line::from(Span::styled(
        book.title.as_str(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));
    let author = Line::from(Span::styled(
        book.author.as_str(),
        Style::default().fg(Color::Gray),
    ));

    let condition_badge = format!(" {} ", book.condition);
    let type_badge = format!(" {} ", book.listing_type);
    let mut badges = vec![
        Span::styled(
            condition_badge.clone(),
            Style::default().fg(Color::Black).bg(Color::Blue),
        ),
        Span::raw(" "),
        Span::styled(
            type_badge.clone(),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ),
    ];

    if let Some(price) = book.formatted_price(currency_symbol) {
        // Right-align the price within the row
        let used = condition_badge.width() + 1 + type_badge.width();
        let gap = width.saturating_sub(used + price.width()).max(2);
        badges.push(Span::raw(" ".repeat(gap)));
        badges.push(Span::styled(
            price,
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }

    ListItem::new(Text::from(vec![title, author, Line::from(badges), Line::default()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_books;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_list(books: &[&BookListing], state: &mut BookListState) -> String {
        let backend = TestBackend::new(60, 14);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| BookList::new(state, books, "₹", true).render(f, f.area()))
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
    fn test_rows_show_fields_and_positive_price_only() {
        let books = sample_books();
        let refs: Vec<&BookListing> = books.iter().collect();
        let mut state = BookListState::new(refs.len());
        let text = render_list(&refs, &mut state);

        assert!(text.contains("Introduction to Algorithms"));
        assert!(text.contains("Donald Knuth"));
        assert!(text.contains("Like New"));
        assert!(text.contains("Exchange"));
        assert!(text.contains("₹45"));
        assert!(!text.contains("₹0"));
        assert!(!text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut state = BookListState::new(0);
        let text = render_list(&[], &mut state);
        assert!(text.contains(EMPTY_MESSAGE));
    }

    #[test]
    fn test_navigation_clamps_at_edges() {
        let mut state = BookListState::new(3);
        assert_eq!(state.selected(), Some(0));

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected(), Some(0));

        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.selected(), Some(2));

        state.handle_event(&TuiEvent::Home);
        assert_eq!(state.selected(), Some(0));

        state.handle_event(&TuiEvent::End);
        assert_eq!(state.selected(), Some(2));
    }

    #[test]
    fn test_submit_opens_selected() {
        let mut state = BookListState::new(2);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(BookListEvent::Open(1))
        );

        let mut empty = BookListState::new(0);
        assert_eq!(empty.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_set_len_clamps_selection() {
        let mut state = BookListState::new(5);
        state.handle_event(&TuiEvent::End);
        state.set_len(2);
        assert_eq!(state.selected(), Some(1));

        state.set_len(0);
        assert_eq!(state.selected(), None);
        assert!(state.is_empty());

        state.set_len(3);
        assert_eq!(state.selected(), Some(0));
    }
}
