//! Crate-level error type.

use crate::prune::PruneError;

/// Errors surfaced by plans, the CLI and the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Prune(#[from] PruneError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error was caused by user input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Prune(e) => e.is_invalid_argument(),
            Self::ConfigError(_) => true,
            Self::Io { .. } | Self::Serialization(_) => false,
        }
    }
}

/// Result type alias for podar operations.
pub type Result<T> = std::result::Result<T, Error>;
