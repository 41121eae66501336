//! Claim entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::ClaimStatus;

/// A receiver's request against a listing.
///
/// Claims are read-only in this system; they arrive through the seed
/// exports and have no creation workflow.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Claim {
    /// Unique claim identifier.
    pub id: i64,
    /// The claimed listing.
    pub listing_id: i64,
    /// The claiming receiver.
    pub receiver_id: i64,
    /// Current status.
    pub status: ClaimStatus,
    /// When the claim was made.
    pub created_at: DateTime<Utc>,
}
