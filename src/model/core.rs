//! Ordered collection of layers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::Layer;
use crate::prune::{PruneError, Result};

/// A model made of a fixed number of layers.
///
/// Layer sizes shrink as pruning runs; the layer count never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    layers: Vec<Layer>,
}

impl Model {
    /// Build a model from existing layers.
    ///
    /// Rejects an empty layer list and layers without weights.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self> {
        if layers.is_empty() {
            return Err(PruneError::invalid("layers", "a model needs at least one layer"));
        }
        for layer in &layers {
            layer.ensure_prunable()?;
        }
        Ok(Self { layers })
    }

    /// Build a model with uniform random weights in `[-1, 1]`.
    ///
    /// Layers are named `layer.{index}`.
    pub fn random<R: Rng + ?Sized>(layer_sizes: &[usize], rng: &mut R) -> Result<Self> {
        if let Some(index) = layer_sizes.iter().position(|&size| size == 0) {
            return Err(PruneError::invalid(
                "layer_sizes",
                format!("layer {index} has size 0 (sizes must be > 0)"),
            ));
        }
        let layers = layer_sizes
            .iter()
            .enumerate()
            .map(|(index, &size)| Layer::random(format!("layer.{index}"), size, rng))
            .collect();
        Self::from_layers(layers)
    }

    /// Build a random model from a fixed seed.
    pub fn seeded(layer_sizes: &[usize], seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::random(layer_sizes, &mut rng)
    }

    /// Number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// All layers in order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer at `index`.
    pub fn layer(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    /// Mutable layer at `index`.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Current size of every layer.
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Layer::size).collect()
    }

    /// Total number of live weights.
    pub fn total_parameters(&self) -> usize {
        self.layers.iter().map(Layer::size).sum()
    }

    /// Release the model, returning its layers.
    pub fn into_layers(self) -> Vec<Layer> {
        self.layers
    }

    pub(crate) fn ensure_prunable(&self) -> Result<()> {
        self.layers.iter().try_for_each(Layer::ensure_prunable)
    }

    /// Swap in one new buffer per layer.
    pub(crate) fn install(&mut self, buffers: Vec<Vec<f32>>) {
        debug_assert_eq!(buffers.len(), self.layers.len());
        for (layer, weights) in self.layers.iter_mut().zip(buffers) {
            layer.replace_weights(weights);
        }
    }
}
