//! Receiver entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An entity accepting donated food (NGO, shelter, charity, etc.).
///
/// Receivers are read-mostly reference data; there is no receiver
/// management workflow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Receiver {
    /// Unique receiver identifier.
    pub id: i64,
    /// Receiver name.
    pub name: String,
    /// Receiver kind (e.g. "NGO", "Shelter").
    pub kind: String,
    /// City the receiver operates in.
    pub city: String,
    /// Contact information (phone or email).
    pub contact: String,
}
