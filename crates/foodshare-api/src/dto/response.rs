//! Response DTOs shared across handlers.

use serde::{Deserialize, Serialize};

/// Generic success envelope wrapping a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Response payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wraps a payload in the success envelope.
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response for operations without a payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Always `true` for successful responses.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Creates a success message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status, "ok" when healthy.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Readiness probe response including dependency checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Service status, "ok" when all checks pass.
    pub status: String,
    /// Database connectivity check, "ok" or "unavailable".
    pub database: String,
}
