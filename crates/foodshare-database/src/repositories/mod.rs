//! Per-entity repositories.

pub mod claim;
pub mod listing;
pub mod provider;
pub mod receiver;
