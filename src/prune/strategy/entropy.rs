//! Entropy-based pruning.

use rand::Rng;

use super::{alloc_buffer, keep_count, retain_where, written_value, PruneStrategy};
use crate::prune::Result;
use crate::stats;

/// Shrinks a layer in proportion to its normalized entropy.
///
/// The target size is `floor(n * (1 - entropy * threshold))`, clamped to
/// `[0, n]`. The magnitude at that rank becomes the cutoff and every weight at
/// or above it survives, so ties at the cutoff can push the result past the
/// target size.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyPruner;

impl EntropyPruner {
    /// Target number of survivors before ties are counted.
    pub fn target_size(weights: &[f32], threshold: f32) -> usize {
        let discard = f64::from(stats::entropy(weights)) * written_value(threshold);
        keep_count(weights.len(), discard)
    }
}

impl PruneStrategy for EntropyPruner {
    fn name(&self) -> &'static str {
        "entropy"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, _rng: &mut R) -> Result<Vec<f32>> {
        let target = Self::target_size(weights, threshold);
        if target == 0 {
            return Ok(Vec::new());
        }

        let mut magnitudes: Vec<f32> = alloc_buffer(weights.len())?;
        magnitudes.extend(weights.iter().map(|w| w.abs()));
        magnitudes.sort_unstable_by(|a, b| b.total_cmp(a));
        let cutoff = magnitudes[target - 1];

        retain_where(weights, |_, w| w.abs() >= cutoff)
    }
}
