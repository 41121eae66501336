//! Listing search and filtering.

pub mod service;

pub use service::{BrowseService, FilterOptions};
