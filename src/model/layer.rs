//! A single layer's weight buffer.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::prune::{PruneError, Result};

/// An exclusively owned, contiguous buffer of weights.
///
/// The layer size is always the live length of the buffer. The buffer is
/// only ever changed by replacing it as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    name: String,
    weights: Vec<f32>,
}

impl Layer {
    /// Create a layer from existing weights.
    pub fn new(name: impl Into<String>, weights: Vec<f32>) -> Self {
        Self { name: name.into(), weights }
    }

    /// Create a layer of `size` weights drawn uniformly from `[-1, 1]`.
    pub fn random<R: Rng + ?Sized>(name: impl Into<String>, size: usize, rng: &mut R) -> Self {
        let weights = (0..size).map(|_| rng.random_range(-1.0f32..=1.0)).collect();
        Self::new(name, weights)
    }

    /// Layer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Number of live weights.
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Check if every weight has been pruned away.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Install a new buffer. The previous buffer is dropped here.
    pub fn replace_weights(&mut self, weights: Vec<f32>) {
        self.weights = weights;
    }

    /// Consume the layer and hand back its buffer.
    pub fn into_weights(self) -> Vec<f32> {
        self.weights
    }

    /// Reject layers no strategy can operate on.
    pub(crate) fn ensure_prunable(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(PruneError::invalid(
                "layer",
                format!("layer '{}' has no weights", self.name),
            ));
        }
        Ok(())
    }
}
