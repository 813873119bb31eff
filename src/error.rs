use thiserror::Error;

use crate::types::Action;

/// Result type for gridworld operations
pub type Result<T> = std::result::Result<T, GridError>;

/// Main error type for the gridworld library
#[derive(Debug, Error)]
pub enum GridError {
    /// Action is not a member of the configured action set
    #[error("Invalid action {action}: not in the action set")]
    InvalidAction {
        action: Action,
    },

    /// Invalid configuration or parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// Overlay input does not match the grid
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// IO errors (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Helper functions for common error patterns
impl GridError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        GridError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        GridError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
