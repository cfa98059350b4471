//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop only draws after input (or a resize) and
//! otherwise sleeps in `poll` for up to 250ms at a time. All pending events
//! are drained before the next draw.
//!
//! ## Focus
//!
//! Tab / Shift+Tab move focus around the browse screen:
//!
//! ```text
//! Search → Category → Type → Condition → List → Search ...
//! ```
//!
//! Up/Down always move the list selection, whatever has focus. Typing while
//! a selector or the list has focus jumps back to the search bar.

pub mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::filter::Selection;
use crate::core::listing::Vocabulary;
use crate::core::source::{JsonFileSource, ListingSource, SampleSource};
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    BookDetail, BookListEvent, BookListState, DetailEvent, FilterEvent, SearchBar, SearchEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Which browse-screen element receives editing keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Category,
    ListingType,
    Condition,
    List,
}

impl Focus {
    const RING: [Focus; 5] = [
        Focus::Search,
        Focus::Category,
        Focus::ListingType,
        Focus::Condition,
        Focus::List,
    ];

    fn position(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.position() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.position() + Self::RING.len() - 1) % Self::RING.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub book_list: BookListState,
}

impl TuiState {
    pub fn new(visible_len: usize) -> Self {
        Self {
            focus: Focus::Search, // User expects to type immediately
            book_list: BookListState::new(visible_len),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), EnableBracketedPaste, SetCursorStyle::SteadyBar)?;
        info!("Terminal modes enabled (bracketed paste, steady bar cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, SetCursorStyle::DefaultUserShape);
    }
}

/// Build the listing source named by the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Box<dyn ListingSource> {
    match &config.data_file {
        Some(path) => Box::new(JsonFileSource::new(path.clone())),
        None => Box::new(SampleSource),
    }
}

pub fn run(config: ResolvedConfig) -> io::Result<()> {
    let source = build_source(&config);
    // Load before touching the terminal so errors print normally
    let books = source.load().map_err(|e| {
        warn!("Failed to load listings from {}: {}", source.name(), e);
        io::Error::other(e)
    })?;
    info!("Loaded {} listings from {}", books.len(), source.name());

    let mut app = App::from_config(books, source.name().to_string(), &config);
    let mut tui = TuiState::new(app.visible().len());

    let mut terminal = ratatui::init();
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, &mut app, &mut tui),
        Err(e) => Err(e),
    };
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(POLL_TIMEOUT)? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut next = Some(first_event);
        while let Some(event) = next {
            if handle_event(app, tui, event) == Effect::Quit {
                info!("Quitting");
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}

/// Route one event to the active screen and apply the resulting action.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::ForceQuit => return update(app, Action::Quit),
        TuiEvent::Resize => return Effect::None,
        _ => {}
    }

    if let Screen::Detail(book) = &app.screen {
        let back = BookDetail::new(book, &app.currency_symbol).handle_event(&event);
        return match back {
            Some(DetailEvent::Back) => update(app, Action::CloseDetail),
            None => Effect::None,
        };
    }

    handle_browse_event(app, tui, event)
}

fn handle_browse_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape => {
            if app.filter.is_default() {
                return update(app, Action::Quit);
            }
            let effect = update(app, Action::ClearFilters);
            tui.book_list.reset(app.visible().len());
            effect
        }
        TuiEvent::NextFocus => {
            tui.focus = tui.focus.next();
            Effect::None
        }
        TuiEvent::PrevFocus => {
            tui.focus = tui.focus.prev();
            Effect::None
        }
        TuiEvent::CursorUp
        | TuiEvent::CursorDown
        | TuiEvent::PageUp
        | TuiEvent::PageDown
        | TuiEvent::Home
        | TuiEvent::End
        | TuiEvent::Submit => {
            let Some(BookListEvent::Open(index)) = tui.book_list.handle_event(&event) else {
                return Effect::None;
            };
            let book = app.visible().get(index).map(|book| (*book).clone());
            match book {
                Some(book) => update(app, Action::OpenDetail(book)),
                None => Effect::None,
            }
        }
        TuiEvent::CursorLeft | TuiEvent::CursorRight => {
            let action = match tui.focus {
                Focus::Category => cycle(app.filter.category, &event).map(Action::SetCategory),
                Focus::ListingType => {
                    cycle(app.filter.listing_type, &event).map(Action::SetListingType)
                }
                Focus::Condition => cycle(app.filter.condition, &event).map(Action::SetCondition),
                Focus::Search | Focus::List => None,
            };
            apply_filter_action(app, tui, action)
        }
        _ => {
            // Editing keys always land in the search bar
            let changed = SearchBar::new(&app.filter.search_query).handle_event(&event);
            let Some(SearchEvent::Changed(query)) = changed else {
                return Effect::None;
            };
            tui.focus = Focus::Search;
            apply_filter_action(app, tui, Some(Action::SetSearchQuery(query)))
        }
    }
}

/// Run a selector's `FilterBar` over the event and map the chosen index back.
fn cycle<T: Vocabulary>(current: Selection<T>, event: &TuiEvent) -> Option<Selection<T>> {
    let mut bar = ui::selector_bar("", current, true);
    match bar.handle_event(event)? {
        FilterEvent::Select(index) => Some(Selection::from_index(index)),
    }
}

/// Filter changes send the list back to its first row.
fn apply_filter_action(app: &mut App, tui: &mut TuiState, action: Option<Action>) -> Effect {
    let Some(action) = action else {
        return Effect::None;
    };
    let effect = update(app, action);
    tui.book_list.reset(app.visible().len());
    effect
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::listing::{Category, Condition, ListingType};
    use crate::test_support::{test_app, test_config};

    fn setup() -> (App, TuiState) {
        let app = test_app();
        let tui = TuiState::new(app.visible().len());
        (app, tui)
    }

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            handle_event(app, tui, TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_focus_ring_wraps() {
        assert_eq!(Focus::Search.next(), Focus::Category);
        assert_eq!(Focus::List.next(), Focus::Search);
        assert_eq!(Focus::Search.prev(), Focus::List);
    }

    #[test]
    fn test_typing_updates_query_and_list() {
        let (mut app, mut tui) = setup();
        type_str(&mut app, &mut tui, "knuth");
        assert_eq!(app.filter.search_query, "knuth");
        assert_eq!(app.visible().len(), 1);
        assert_eq!(tui.book_list.len(), 1);

        handle_event(&mut app, &mut tui, TuiEvent::Backspace);
        assert_eq!(app.filter.search_query, "knut");
    }

    #[test]
    fn test_typing_from_list_jumps_to_search() {
        let (mut app, mut tui) = setup();
        tui.focus = Focus::List;
        type_str(&mut app, &mut tui, "art");
        assert_eq!(tui.focus, Focus::Search);
        assert_eq!(app.filter.search_query, "art");
    }

    #[test]
    fn test_arrows_cycle_focused_selector() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::NextFocus);
        assert_eq!(tui.focus, Focus::Category);
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.filter.category, Selection::Only(Category::ComputerScience));

        handle_event(&mut app, &mut tui, TuiEvent::NextFocus);
        handle_event(&mut app, &mut tui, TuiEvent::CursorLeft);
        assert_eq!(app.filter.listing_type, Selection::Only(ListingType::Exchange));
        assert_eq!(app.visible().len(), 1);

        handle_event(&mut app, &mut tui, TuiEvent::NextFocus);
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        assert_eq!(app.filter.condition, Selection::Only(Condition::New));
        assert!(app.visible().is_empty());
        assert!(tui.book_list.is_empty());
    }

    #[test]
    fn test_arrows_ignored_in_search() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::CursorRight);
        assert!(app.filter.is_default());
    }

    #[test]
    fn test_enter_opens_selected_listing_and_escape_returns() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::CursorDown);
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.screen, Screen::Detail(app.books[1].clone()));

        // Typing on the detail screen doesn't touch the query
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('x'));
        assert!(app.filter.search_query.is_empty());

        let effect = handle_event(&mut app, &mut tui, TuiEvent::Escape);
        assert_eq!(effect, Effect::None);
        assert_eq!(app.screen, Screen::Browse);
    }

    #[test]
    fn test_enter_on_empty_list_does_nothing() {
        let (mut app, mut tui) = setup();
        type_str(&mut app, &mut tui, "no such book");
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(app.screen, Screen::Browse);
    }

    #[test]
    fn test_escape_clears_then_quits() {
        let (mut app, mut tui) = setup();
        type_str(&mut app, &mut tui, "knuth");

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::None);
        assert!(app.filter.is_default());
        assert_eq!(tui.book_list.len(), 2);

        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::Escape), Effect::Quit);
    }

    #[test]
    fn test_force_quit_from_detail() {
        let (mut app, mut tui) = setup();
        handle_event(&mut app, &mut tui, TuiEvent::Submit);
        assert_eq!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit), Effect::Quit);
    }

    #[test]
    fn test_build_source_defaults_to_sample() {
        let source = build_source(&test_config());
        assert_eq!(source.name(), "sample");
    }
}
