//! Error handling module for coplan
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the crate should use these types for consistency.

use thiserror::Error;

/// Main error type for coplan
#[derive(Error, Debug)]
pub enum CoplanError {
    /// IO errors (snapshot file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Consistency validation errors (section state vs. state data)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for coplan operations
pub type Result<T> = std::result::Result<T, CoplanError>;

impl CoplanError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
