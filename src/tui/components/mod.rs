//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props and own nothing:
//! - `TitleBar`: Top status bar showing source, count and status
//! - `SearchBar`: Controlled text field; emits the new full query
//! - `FilterBar`: One-line option selector
//! - `BookDetail`: Single listing view
//! - `HelpBar`: Bottom line of key hints
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `BookList`: Scrollable listing rows; selection lives in `BookListState`
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into `App`.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! SearchBar::new(&app.filter.search_query).focused(true).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! search_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── search_bar.rs    (Query field)
//! ├── filter_bar.rs    (Category / type / condition selectors)
//! ├── help_bar.rs      (Key hints)
//! ├── book_list.rs     (Filtered listings)
//! └── book_detail.rs   (One listing)
//! ```

pub mod book_detail;
pub mod book_list;
pub mod filter_bar;
mod help_bar;
pub mod search_bar;
mod title_bar;

pub use book_detail::{BookDetail, DetailEvent};
pub use book_list::{BookList, BookListEvent, BookListState};
pub use filter_bar::{FilterBar, FilterEvent};
pub use help_bar::HelpBar;
pub use search_bar::{SearchBar, SearchEvent};
pub use title_bar::TitleBar;
