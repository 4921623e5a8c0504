//! Gradient-importance pruning.
//!
//! Importance is `|w * g|`. No backward pass exists here, so the default
//! source draws `g` uniformly from `[-1, 1]`. Real gradients can be supplied
//! through [`ProvidedGradients`].

use rand::Rng;

use super::{alloc_buffer, retain_where, PruneStrategy};
use crate::prune::{PruneError, Result};

/// Supplies one gradient value per weight.
pub trait GradientSource {
    /// Produce `len` gradient values.
    fn gradients(&mut self, len: usize) -> Result<Vec<f32>>;
}

/// Uniform noise in `[-1, 1]` standing in for real gradients.
#[derive(Debug)]
pub struct SimulatedGradients<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> SimulatedGradients<'a, R> {
    /// Draw gradients from `rng`.
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> GradientSource for SimulatedGradients<'_, R> {
    fn gradients(&mut self, len: usize) -> Result<Vec<f32>> {
        let mut gradients = alloc_buffer(len)?;
        gradients.extend((0..len).map(|_| self.rng.random_range(-1.0f32..=1.0)));
        Ok(gradients)
    }
}

/// Gradients computed elsewhere, one per weight.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvidedGradients {
    values: Vec<f32>,
}

impl ProvidedGradients {
    /// Wrap externally computed gradients.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }
}

impl GradientSource for ProvidedGradients {
    fn gradients(&mut self, len: usize) -> Result<Vec<f32>> {
        if self.values.len() != len {
            return Err(PruneError::invalid(
                "gradients",
                format!("expected {len} gradients, got {}", self.values.len()),
            ));
        }
        let mut gradients = alloc_buffer(len)?;
        gradients.extend_from_slice(&self.values);
        Ok(gradients)
    }
}

/// Keeps weights whose importance `|w * g|` exceeds the threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientPruner;

impl GradientPruner {
    /// Prune with gradients from an explicit source.
    pub fn select_with<G: GradientSource + ?Sized>(
        &self,
        weights: &[f32],
        threshold: f32,
        source: &mut G,
    ) -> Result<Vec<f32>> {
        let gradients = source.gradients(weights.len())?;
        retain_where(weights, |i, w| (w * gradients[i]).abs() > threshold)
    }
}

impl PruneStrategy for GradientPruner {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, rng: &mut R) -> Result<Vec<f32>> {
        self.select_with(weights, threshold, &mut SimulatedGradients::new(rng))
    }
}
