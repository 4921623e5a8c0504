//! Variance-based pruning.

use rand::Rng;
use tracing::warn;

use super::{retain_where, PruneStrategy};
use crate::prune::Result;
use crate::stats;

/// Keeps weights whose magnitude exceeds `threshold` standard deviations.
///
/// A layer with zero spread has no meaningful cutoff and is kept whole.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariancePruner;

impl PruneStrategy for VariancePruner {
    fn name(&self) -> &'static str {
        "variance"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, _rng: &mut R) -> Result<Vec<f32>> {
        let std_dev = stats::std_dev(weights);
        if std_dev == 0.0 {
            warn!(len = weights.len(), "zero standard deviation, variance pruning keeps every weight");
            return retain_where(weights, |_, _| true);
        }
        let cutoff = threshold * std_dev;
        retain_where(weights, |_, w| w.abs() > cutoff)
    }
}
