//! # Listings
//!
//! A `BookListing` is one secondhand book offered for sale or exchange.
//!
//! ```text
//! BookListing
//! ├── id: String                 // unique within a loaded collection
//! ├── title, author: String      // display strings, searched by the filter
//! ├── category: Category         // closed vocabulary
//! ├── condition: Condition       // closed vocabulary
//! ├── listing_type: ListingType  // closed vocabulary
//! ├── price: u32                 // 0 = no price shown
//! ├── status: Status
//! └── contact: String            // detail screen only
//! ```
//!
//! The enumerated fields are the same types the filter selectors are built
//! from, so a listing can never hold a value no selector can reach.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed set of values that a filter selector offers.
pub trait Vocabulary: Copy + PartialEq + 'static {
    /// Every value, in the order selectors present them.
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Category {
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    Engineering,
    Economics,
    Literature,
    History,
    Other,
}

impl Vocabulary for Category {
    const ALL: &'static [Self] = &[
        Category::ComputerScience,
        Category::Mathematics,
        Category::Physics,
        Category::Chemistry,
        Category::Biology,
        Category::Engineering,
        Category::Economics,
        Category::Literature,
        Category::History,
        Category::Other,
    ];

    fn label(&self) -> &'static str {
        match self {
            Category::ComputerScience => "Computer Science",
            Category::Mathematics => "Mathematics",
            Category::Physics => "Physics",
            Category::Chemistry => "Chemistry",
            Category::Biology => "Biology",
            Category::Engineering => "Engineering",
            Category::Economics => "Economics",
            Category::Literature => "Literature",
            Category::History => "History",
            Category::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Condition {
    New,
    #[serde(rename = "Like New")]
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Vocabulary for Condition {
    const ALL: &'static [Self] = &[
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ListingType {
    Sale,
    Exchange,
}

impl Vocabulary for ListingType {
    const ALL: &'static [Self] = &[ListingType::Sale, ListingType::Exchange];

    fn label(&self) -> &'static str {
        match self {
            ListingType::Sale => "Sale",
            ListingType::Exchange => "Exchange",
        }
    }
}

/// Availability of a listing. Not a filter selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Status {
    #[default]
    Available,
    Reserved,
    Sold,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Reserved => "Reserved",
            Status::Sold => "Sold",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(Category, Condition, ListingType, Status);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListing {
    pub id: String,
    pub title: String,
    pub author: String,
    pub category: Category,
    pub condition: Condition,
    pub listing_type: ListingType,
    pub price: u32,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub contact: String,
}

impl BookListing {
    /// Whether a price should be shown at all.
    pub fn has_price(&self) -> bool {
        self.price > 0
    }

    /// Price with the given currency symbol, or `None` for unpriced listings.
    pub fn formatted_price(&self, currency_symbol: &str) -> Option<String> {
        self.has_price()
            .then(|| format!("{currency_symbol}{}", self.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_books;

    #[test]
    fn test_labels_match_serialized_names() {
        for category in Category::ALL {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
        }
        for condition in Condition::ALL {
            let json = serde_json::to_string(condition).unwrap();
            assert_eq!(json, format!("\"{}\"", condition.label()));
        }
    }

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": "7",
            "title": "Linear Algebra Done Right",
            "author": "Sheldon Axler",
            "category": "Mathematics",
            "condition": "Like New",
            "listingType": "Exchange",
            "price": 0,
            "status": "Reserved",
            "contact": "axler@example.com"
        }"#;
        let book: BookListing = serde_json::from_str(json).unwrap();
        assert_eq!(book.category, Category::Mathematics);
        assert_eq!(book.condition, Condition::LikeNew);
        assert_eq!(book.listing_type, ListingType::Exchange);
        assert_eq!(book.status, Status::Reserved);
    }

    #[test]
    fn test_status_and_contact_default_when_missing() {
        let json = r#"{"id":"1","title":"T","author":"A","category":"Other",
            "condition":"Fair","listingType":"Sale","price":10}"#;
        let book: BookListing = serde_json::from_str(json).unwrap();
        assert_eq!(book.status, Status::Available);
        assert!(book.contact.is_empty());
    }

    #[test]
    fn test_unknown_vocabulary_value_rejected() {
        let json = r#"{"id":"1","title":"T","author":"A","category":"Astrology",
            "condition":"Fair","listingType":"Sale","price":10}"#;
        assert!(serde_json::from_str::<BookListing>(json).is_err());
    }

    #[test]
    fn test_formatted_price_hidden_for_zero() {
        let books = sample_books();
        assert_eq!(books[0].formatted_price("₹").as_deref(), Some("₹45"));
        assert_eq!(books[1].formatted_price("₹"), None);
    }
}
