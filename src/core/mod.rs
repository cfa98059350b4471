//! # Core Application Logic
//!
//! This module contains Bookswap's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Listings + sources   │
//!                    │  • FilterState          │
//!                    │  • State / Action       │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`listing`]: `BookListing` and its closed vocabularies
//! - [`filter`]: `FilterState` and the visibility predicate
//! - [`source`]: `ListingSource` implementations
//! - [`config`]: layered configuration
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app

pub mod action;
pub mod config;
pub mod filter;
pub mod listing;
pub mod source;
pub mod state;
