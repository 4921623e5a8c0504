//! L1-norm pruning.

use rand::Rng;

use super::{retain_where, PruneStrategy};
use crate::prune::Result;
use crate::stats;

/// Keeps weights above `threshold` times the mean absolute value.
#[derive(Debug, Clone, Copy, Default)]
pub struct L1NormPruner;

impl PruneStrategy for L1NormPruner {
    fn name(&self) -> &'static str {
        "l1_norm"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, _rng: &mut R) -> Result<Vec<f32>> {
        if weights.is_empty() {
            return Ok(Vec::new());
        }
        let cutoff = threshold * stats::l1_norm(weights) / weights.len() as f32;
        retain_where(weights, |_, w| w.abs() > cutoff)
    }
}
