//! Error types for the pruning engine.

use thiserror::Error;

/// Pruning and compression errors.
///
/// Every variant is returned before the targeted layer or model is mutated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PruneError {
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: &'static str, message: String },

    #[error(
        "Unknown pruning method: {0} (must be one of: magnitude, percentage, random, variance, l1_norm, gradient, entropy)"
    )]
    UnknownMethod(String),

    #[error("Failed to allocate a buffer of {requested} elements")]
    AllocationFailed { requested: usize },
}

impl PruneError {
    /// Build an `InvalidArgument` error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument { field, message: message.into() }
    }

    /// Whether the caller passed something outside the accepted domain.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::UnknownMethod(_))
    }
}

/// Result type for pruning operations
pub type Result<T> = std::result::Result<T, PruneError>;
