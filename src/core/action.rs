//! # Actions
//!
//! Everything that can happen in Bookswap becomes an `Action`.
//! User types in the search bar? That's `Action::SetSearchQuery(text)`.
//! User presses Enter on a row? That's `Action::OpenDetail(book)`.
//!
//! The `update()` function takes the current state and an action,
//! then mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```

use log::debug;

use crate::core::filter::Selection;
use crate::core::listing::{BookListing, Category, Condition, ListingType};
use crate::core::state::{App, Screen};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSearchQuery(String),
    SetCategory(Selection<Category>),
    SetListingType(Selection<ListingType>),
    SetCondition(Selection<Condition>),
    ClearFilters,
    OpenDetail(BookListing),
    CloseDetail,
    Quit,
}

/// What the event loop must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::SetSearchQuery(query) => {
            app.filter.search_query = query;
            refresh_status(app);
        }
        Action::SetCategory(category) => {
            app.filter.category = category;
            refresh_status(app);
        }
        Action::SetListingType(listing_type) => {
            app.filter.listing_type = listing_type;
            refresh_status(app);
        }
        Action::SetCondition(condition) => {
            app.filter.condition = condition;
            refresh_status(app);
        }
        Action::ClearFilters => {
            app.filter.reset();
            app.status_message = "Filters cleared".to_string();
        }
        Action::OpenDetail(book) => {
            app.status_message = book.title.clone();
            app.screen = Screen::Detail(book);
        }
        Action::CloseDetail => {
            app.screen = Screen::Browse;
            refresh_status(app);
        }
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

fn refresh_status(app: &mut App) {
    app.status_message = if app.filter.is_default() {
        String::new()
    } else {
        format!("{} of {} listings", app.visible().len(), app.books.len())
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_set_search_query_narrows_visible() {
        let mut app = test_app();
        let effect = update(&mut app, Action::SetSearchQuery("knuth".to_string()));
        assert_eq!(effect, Effect::None);
        assert_eq!(app.filter.search_query, "knuth");
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.status_message, "1 of 2 listings");
    }

    #[test]
    fn test_selectors_update_filter() {
        let mut app = test_app();
        update(&mut app, Action::SetCategory(Selection::Only(Category::History)));
        assert!(app.visible().is_empty());
        assert_eq!(app.status_message, "0 of 2 listings");

        update(&mut app, Action::SetCategory(Selection::All));
        update(&mut app, Action::SetListingType(Selection::Only(ListingType::Sale)));
        update(&mut app, Action::SetCondition(Selection::Only(Condition::Good)));
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.visible()[0].id, "1");
    }

    #[test]
    fn test_clear_filters() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchQuery("zzz".to_string()));
        update(&mut app, Action::SetCondition(Selection::Only(Condition::Poor)));
        update(&mut app, Action::ClearFilters);
        assert!(app.filter.is_default());
        assert_eq!(app.visible().len(), 2);
    }

    #[test]
    fn test_open_and_close_detail() {
        let mut app = test_app();
        let book = app.books[1].clone();
        update(&mut app, Action::OpenDetail(book.clone()));
        assert_eq!(app.screen, Screen::Detail(book));

        update(&mut app, Action::CloseDetail);
        assert_eq!(app.screen, Screen::Browse);
    }

    #[test]
    fn test_detail_keeps_filter_state() {
        let mut app = test_app();
        update(&mut app, Action::SetSearchQuery("art".to_string()));
        let book = app.visible()[0].clone();
        update(&mut app, Action::OpenDetail(book));
        update(&mut app, Action::CloseDetail);
        assert_eq!(app.filter.search_query, "art");
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
