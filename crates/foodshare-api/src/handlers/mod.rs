//! HTTP request handlers, one module per dashboard panel.

pub mod admin;
pub mod analytics;
pub mod claim;
pub mod console;
pub mod health;
pub mod listing;
pub mod provider;
pub mod receiver;
