//! Claim entity.

pub mod model;
pub mod status;

pub use model::Claim;
pub use status::ClaimStatus;
