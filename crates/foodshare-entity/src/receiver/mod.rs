//! Receiver entity.

pub mod model;

pub use model::Receiver;
