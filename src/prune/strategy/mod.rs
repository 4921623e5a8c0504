//! Weight selection strategies.
//!
//! Each strategy looks at a layer's weights and a threshold and builds the
//! buffer of survivors. Strategies never modify their input; the dispatcher
//! swaps the returned buffer into the layer.
//!
//! | Strategy | Keeps |
//! |---|---|
//! | [`MagnitudePruner`] | `|w| > |t|` |
//! | [`PercentagePruner`] | top `floor(n * (1 - t))` by magnitude |
//! | [`RandomPruner`] | `floor(n * (1 - t))` uniformly chosen weights |
//! | [`VariancePruner`] | `|w| > t * std_dev` |
//! | [`L1NormPruner`] | `|w| > t * l1_norm / n` |
//! | [`GradientPruner`] | `|w * g| > t` |
//! | [`EntropyPruner`] | magnitudes at or above an entropy-derived cutoff |

mod entropy;
mod gradient;
mod l1_norm;
mod magnitude;
mod percentage;
mod random;
mod variance;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;

pub use entropy::EntropyPruner;
pub use gradient::{GradientPruner, GradientSource, ProvidedGradients, SimulatedGradients};
pub use l1_norm::L1NormPruner;
pub use magnitude::MagnitudePruner;
pub use percentage::PercentagePruner;
pub use random::RandomPruner;
pub use variance::VariancePruner;

use rand::Rng;

use crate::prune::{PruneError, Result};

/// A per-weight keep/discard policy.
pub trait PruneStrategy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Compute the surviving weights of `weights` under `threshold`.
    ///
    /// Deterministic strategies ignore `rng`.
    fn select<R: Rng + ?Sized>(
        &self,
        weights: &[f32],
        threshold: f32,
        rng: &mut R,
    ) -> Result<Vec<f32>>;
}

/// Allocate an empty buffer able to hold `capacity` elements.
///
/// Every buffer the strategies and the compressor build goes through here,
/// so running out of memory surfaces as [`PruneError::AllocationFailed`].
pub(crate) fn alloc_buffer<T>(capacity: usize) -> Result<Vec<T>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| PruneError::AllocationFailed { requested: capacity })?;
    Ok(buffer)
}

/// Copy the weights for which `keep(index, weight)` holds, in input order.
pub(crate) fn retain_where<F>(weights: &[f32], keep: F) -> Result<Vec<f32>>
where
    F: Fn(usize, f32) -> bool,
{
    let count = weights.iter().enumerate().filter(|&(i, &w)| keep(i, w)).count();
    let mut kept = alloc_buffer(count)?;
    kept.extend(weights.iter().enumerate().filter(|&(i, &w)| keep(i, w)).map(|(_, &w)| w));
    Ok(kept)
}

/// Number of weights left after discarding `fraction` of `len`.
///
/// `retained_count(10, 0.3) == 7` and `retained_count(n, 0.0) == n` for
/// every `n`.
pub(crate) fn retained_count(len: usize, fraction: f32) -> Result<usize> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(PruneError::invalid(
            "threshold",
            format!("fraction {fraction} must be between 0.0 and 1.0"),
        ));
    }
    Ok(keep_count(len, written_value(fraction)))
}

/// `floor(len * (1 - discard))` clamped to `[0, len]`, computed in `f64`.
///
/// A small relative slack keeps products that are integers in decimal, like
/// `10 * (1 - 0.3)`, from truncating one below.
pub(crate) fn keep_count(len: usize, discard: f64) -> usize {
    let n = len as f64;
    let keep = n * (1.0 - discard);
    if keep.is_nan() || keep <= 0.0 {
        return 0;
    }
    let keep = keep + keep * 4.0 * f64::EPSILON;
    (keep.floor() as usize).min(len)
}

/// The `f64` nearest to the shortest decimal that reads back as `value`.
///
/// `0.3f32` is stored as `0.30000001192...`; this gives `0.3`.
pub(crate) fn written_value(value: f32) -> f64 {
    value.to_string().parse().unwrap_or_else(|_| f64::from(value))
}
