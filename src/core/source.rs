//! # Listing Sources
//!
//! Where the browse screen's listings come from. The app asks its source
//! once at startup and keeps the result in `App.books`.
//!
//! - `SampleSource`: the built-in sample listings
//! - `JsonFileSource`: a JSON array of listings on disk

use log::{debug, info};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::core::listing::{BookListing, Category, Condition, ListingType, Status};

/// Supplies the full listing collection.
pub trait ListingSource {
    /// Short human-readable name, shown in the title bar.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<BookListing>, SourceError>;
}

#[derive(Debug)]
pub enum SourceError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
    DuplicateId(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            SourceError::Parse { path, source } => {
                write!(f, "failed to parse {}: {source}", path.display())
            }
            SourceError::DuplicateId(id) => write!(f, "duplicate listing id: {id}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io { source, .. } => Some(source),
            SourceError::Parse { source, .. } => Some(source),
            SourceError::DuplicateId(_) => None,
        }
    }
}

/// Rejects collections where two listings share an id.
pub fn ensure_unique_ids(books: &[BookListing]) -> Result<(), SourceError> {
    let mut seen = HashSet::new();
    for book in books {
        if !seen.insert(book.id.as_str()) {
            return Err(SourceError::DuplicateId(book.id.clone()));
        }
    }
    Ok(())
}

pub struct SampleSource;

impl ListingSource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn load(&self) -> Result<Vec<BookListing>, SourceError> {
        Ok(vec![
            BookListing {
                id: "1".to_string(),
                title: "Introduction to Algorithms".to_string(),
                author: "Cormen, Leiserson".to_string(),
                category: Category::ComputerScience,
                condition: Condition::Good,
                listing_type: ListingType::Sale,
                price: 45,
                status: Status::Available,
                contact: "john@example.com".to_string(),
            },
            BookListing {
                id: "2".to_string(),
                title: "The Art of Computer Programming".to_string(),
                author: "Donald Knuth".to_string(),
                category: Category::ComputerScience,
                condition: Condition::LikeNew,
                listing_type: ListingType::Exchange,
                price: 0,
                status: Status::Available,
                contact: "sarah@example.com".to_string(),
            },
        ])
    }
}

pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

impl ListingSource for JsonFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<BookListing>, SourceError> {
        debug!("Reading listings from {}", self.path.display());
        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let books: Vec<BookListing> =
            serde_json::from_str(&contents).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;
        ensure_unique_ids(&books)?;
        info!("Loaded {} listings from {}", books.len(), self.path.display());
        Ok(books)
    }
}
