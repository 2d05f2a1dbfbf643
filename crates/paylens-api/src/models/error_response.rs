//! Error response envelope shared by every endpoint.

use serde::Serialize;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type identifier (e.g., "unauthorized", "not_found")
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    #[inline]
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }
}
