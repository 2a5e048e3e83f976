//! Cross-cutting error types for settle.
//!
//! Only structural failures live here. A single malformed project or task
//! record is not an error: it is skipped and reported alongside the result
//! (see [`crate::request`]).

use thiserror::Error;

/// Errors raised while reading a request payload.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A structurally required field is missing or has the wrong type.
    #[error("Malformed input at '{field}': {reason}")]
    MalformedInput { field: String, reason: String },

    /// The payload is not valid JSON.
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    pub(crate) fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
