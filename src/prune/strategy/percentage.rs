//! Percentage (top-k) pruning.

use rand::Rng;

use super::{alloc_buffer, retained_count, PruneStrategy};
use crate::prune::Result;

/// Keeps the `floor(n * (1 - threshold))` largest weights by magnitude.
///
/// Survivors come out ranked by descending magnitude. The sort is stable,
/// so equal magnitudes keep ascending index order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentagePruner;

impl PruneStrategy for PercentagePruner {
    fn name(&self) -> &'static str {
        "percentage"
    }

    fn select<R: Rng + ?Sized>(&self, weights: &[f32], threshold: f32, _rng: &mut R) -> Result<Vec<f32>> {
        let keep = retained_count(weights.len(), threshold)?;

        let mut ranked: Vec<usize> = alloc_buffer(weights.len())?;
        ranked.extend(0..weights.len());
        ranked.sort_by(|&a, &b| weights[b].abs().total_cmp(&weights[a].abs()));

        let mut kept = alloc_buffer(keep)?;
        kept.extend(ranked.iter().take(keep).map(|&i| weights[i]));
        Ok(kept)
    }
}
