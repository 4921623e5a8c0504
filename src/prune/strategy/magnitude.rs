//! Magnitude-based pruning (Han et al., 2015).

use rand::Rng;

use super::{retain_where, PruneStrategy};
use crate::prune::Result;

/// Keeps weights whose magnitude exceeds `|threshold|`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MagnitudePruner;

impl PruneStrategy for MagnitudePruner {
    fn name(&self) -> &'static str {
        "magnitude"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, _rng: &mut R) -> Result<Vec<f32>> {
        let cutoff = threshold.abs();
        retain_where(weights, |_, w| w.abs() > cutoff)
    }
}
