//! # Filtering
//!
//! The browse screen's filter state and the predicate it applies.
//!
//! A listing is visible iff every constraint admits it:
//!
//! ```text
//! query ⊂ title|author (case-insensitive)  AND  category  AND  type  AND  condition
//! ```
//!
//! Filtering is a linear scan that keeps the input order. There is no
//! caching: the list is recomputed from `App.books` on every frame.

use crate::core::listing::{BookListing, Category, Condition, ListingType, Status, Vocabulary};

/// One selector's current choice: everything, or a single vocabulary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

// No `T: Default` bound: vocabularies have no default value
impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: Vocabulary> Selection<T> {
    /// `All` followed by every vocabulary value, in selector order.
    pub fn options() -> Vec<Selection<T>> {
        std::iter::once(Selection::All)
            .chain(T::ALL.iter().copied().map(Selection::Only))
            .collect()
    }

    pub fn option_count() -> usize {
        T::ALL.len() + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            Selection::All => "All",
            Selection::Only(value) => value.label(),
        }
    }

    /// Position within `options()`.
    pub fn index(&self) -> usize {
        match self {
            Selection::All => 0,
            Selection::Only(value) => T::ALL
                .iter()
                .position(|v| v == value)
                .map_or(0, |i| i + 1),
        }
    }

    /// Inverse of `index()`. Out-of-range indices select `All`.
    pub fn from_index(index: usize) -> Self {
        match index.checked_sub(1).and_then(|i| T::ALL.get(i)) {
            Some(value) => Selection::Only(*value),
            None => Selection::All,
        }
    }

    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::option_count())
    }

    pub fn prev(&self) -> Self {
        let count = Self::option_count();
        Self::from_index((self.index() + count - 1) % count)
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => selected == value,
        }
    }
}

/// Transient filter constraints for the browse screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub category: Selection<Category>,
    pub listing_type: Selection<ListingType>,
    pub condition: Selection<Condition>,
    /// Hide reserved and sold listings. Comes from configuration, not from a selector.
    pub available_only: bool,
}

impl FilterState {
    pub fn new(available_only: bool) -> Self {
        Self {
            available_only,
            ..Default::default()
        }
    }

    pub fn matches(&self, book: &BookListing) -> bool {
        self.matches_query(book)
            && self.category.admits(&book.category)
            && self.listing_type.admits(&book.listing_type)
            && self.condition.admits(&book.condition)
            && (!self.available_only || book.status == Status::Available)
    }

    fn matches_query(&self, book: &BookListing) -> bool {
        if self.search_query.is_empty() {
            return true;
        }
        let needle = self.search_query.to_lowercase();
        book.title.to_lowercase().contains(&needle) || book.author.to_lowercase().contains(&needle)
    }

    /// Listings admitted by every constraint, in their original order.
    pub fn apply<'a>(&self, books: &'a [BookListing]) -> Vec<&'a BookListing> {
        books.iter().filter(|book| self.matches(book)).collect()
    }

    /// True when no user selection narrows the list.
    pub fn is_default(&self) -> bool {
        self.search_query.is_empty()
            && self.category == Selection::All
            && self.listing_type == Selection::All
            && self.condition == Selection::All
    }

    /// Clears the query and every selector. `available_only` is kept.
    pub fn reset(&mut self) {
        *self = Self::new(self.available_only);
    }
}
