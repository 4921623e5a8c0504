//! Random pruning baseline.

use rand::seq::index;
use rand::Rng;

use super::{alloc_buffer, retain_where, retained_count, PruneStrategy};
use crate::prune::Result;

/// Keeps exactly `floor(n * (1 - threshold))` weights chosen uniformly
/// without replacement. Survivors keep their original order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPruner;

impl PruneStrategy for RandomPruner {
    fn name(&self) -> &'static str {
        "random"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, rng: &mut R) -> Result<Vec<f32>> {
        let keep = retained_count(weights.len(), threshold)?;

        let mut mask: Vec<bool> = alloc_buffer(weights.len())?;
        mask.resize(weights.len(), false);
        for i in index::sample(rng, weights.len(), keep) {
            mask[i] = true;
        }
        retain_where(weights, |i, _| mask[i])
    }
}
