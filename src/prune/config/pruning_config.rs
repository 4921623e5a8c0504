//! Main pruning configuration struct.

use serde::{Deserialize, Serialize};

use super::PruneMethod;
use crate::prune::Result;

/// A pruning method together with its threshold.
///
/// # Example
///
/// ```
/// use podar::prune::{PruneMethod, PruningConfig};
///
/// let config = PruningConfig::default()
///     .with_method(PruneMethod::Percentage)
///     .with_threshold(0.3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PruningConfig {
    /// Pruning method to use.
    #[serde(default)]
    method: PruneMethod,

    /// Method-specific threshold.
    threshold: f32,
}

impl Default for PruningConfig {
    fn default() -> Self {
        Self { method: PruneMethod::default(), threshold: 0.1 }
    }
}

impl PruningConfig {
    /// Create a configuration for `method` at `threshold`.
    pub fn new(method: PruneMethod, threshold: f32) -> Self {
        Self { method, threshold }
    }

    /// Set the pruning method.
    pub fn with_method(mut self, method: PruneMethod) -> Self {
        self.method = method;
        self
    }

    /// Set the threshold.
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Get the pruning method.
    pub fn method(&self) -> PruneMethod {
        self.method
    }

    /// Get the threshold.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        self.method.validate_threshold(self.threshold)
    }
}
