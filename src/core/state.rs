//! # Application State
//!
//! Core business state for Bookswap. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── books: Vec<BookListing>     // loaded once from the source, never mutated
//! ├── source_name: String         // where the books came from
//! ├── filter: FilterState         // query + selectors
//! ├── screen: Screen              // browse list or one listing's detail
//! ├── status_message: String      // status bar text
//! ├── currency_symbol: String     // price formatting
//! └── search_placeholder: String  // shown in the empty search bar
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::core::config::ResolvedConfig;
use crate::core::filter::FilterState;
use crate::core::listing::BookListing;

/// The screen currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Browse,
    /// Detail view for a listing, carried by value.
    Detail(BookListing),
}

pub struct App {
    pub books: Vec<BookListing>,
    pub source_name: String,
    pub filter: FilterState,
    pub screen: Screen,
    pub status_message: String,
    pub currency_symbol: String,
    pub search_placeholder: String,
}

impl App {
    pub fn from_config(books: Vec<BookListing>, source_name: String, config: &ResolvedConfig) -> Self {
        Self {
            books,
            source_name,
            filter: FilterState::new(config.available_only),
            screen: Screen::Browse,
            status_message: String::new(),
            currency_symbol: config.currency_symbol.clone(),
            search_placeholder: config.search_placeholder.clone(),
        }
    }

    /// Listings that pass the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&BookListing> {
        self.filter.apply(&self.books)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.screen, Screen::Browse);
        assert!(app.filter.is_default());
        assert_eq!(app.source_name, "sample");
        assert_eq!(app.visible().len(), app.books.len());
    }
}
