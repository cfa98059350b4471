//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;
use crate::core::listing::{BookListing, Category, Condition, ListingType, Status};
use crate::core::source::{ListingSource, SampleSource};
use crate::core::state::App;

/// The built-in sample listings: a priced sale and an unpriced exchange.
pub fn sample_books() -> Vec<BookListing> {
    SampleSource.load().expect("sample listings always load")
}

/// A physics sale listing with the given identity and status.
pub fn book(id: &str, title: &str, author: &str, status: Status) -> BookListing {
    BookListing {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        category: Category::Physics,
        condition: Condition::Fair,
        listing_type: ListingType::Sale,
        price: 10,
        status,
        contact: String::new(),
    }
}

/// Config with defaults and no environment influence.
pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        data_file: None,
        available_only: false,
        currency_symbol: "₹".to_string(),
        search_placeholder: "Search by title or author".to_string(),
    }
}

/// Creates a test App over the sample listings.
pub fn test_app() -> App {
    App::from_config(sample_books(), "sample".to_string(), &test_config())
}
