//! Provider entity.

pub mod model;

pub use model::{CreateProvider, Provider, ProviderContact, UpdateProvider};
