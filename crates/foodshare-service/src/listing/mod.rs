//! Listing management.

pub mod service;

pub use service::ListingService;
