//! Claim status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use foodshare_core::AppError;

/// Lifecycle status of a claim, stored as TEXT in SQLite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
pub enum ClaimStatus {
    /// The claim has been made but not yet fulfilled.
    Pending,
    /// The food was handed over.
    Completed,
    /// The claim was withdrawn or rejected.
    Cancelled,
}

impl ClaimStatus {
    /// All known statuses, in display order.
    pub const ALL: [ClaimStatus; 3] = [Self::Pending, Self::Completed, Self::Cancelled];

    /// Return the status as its stored string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Completed" => Ok(Self::Completed),
            "Cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::validation(format!(
                "Invalid claim status: '{s}'. Expected one of: Pending, Completed, Cancelled"
            ))),
        }
    }
}
