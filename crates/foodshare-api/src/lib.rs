//! HTTP API layer for FoodShare.
//!
//! Routes are organized per dashboard panel and mounted under `/api`.
//! Handlers receive [`state::AppState`] via Axum's `State` extractor and
//! delegate to the service crate.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
