//! Layer and model level pruning entry points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use super::strategy::{GradientPruner, GradientSource};
use super::{PruneMethod, PruningConfig, Result};
use crate::model::{Layer, Model};

/// Prune one layer in place.
///
/// The layer keeps its old buffer if anything fails.
pub fn prune_layer<R: Rng + ?Sized>(
    layer: &mut Layer,
    method: PruneMethod,
    threshold: f32,
    rng: &mut R,
) -> Result<()> {
    layer.ensure_prunable()?;
    let pruned = method.apply(layer.weights(), threshold, rng)?;
    debug!(
        layer = layer.name(),
        strategy = method.strategy_name(),
        original = layer.size(),
        pruned = pruned.len(),
        "pruned layer"
    );
    layer.replace_weights(pruned);
    Ok(())
}

/// Prune one layer selecting the method by numeric tag.
///
/// An unknown tag is rejected and the layer is left as it was.
pub fn prune_layer_tag<R: Rng + ?Sized>(
    layer: &mut Layer,
    tag: u32,
    threshold: f32,
    rng: &mut R,
) -> Result<()> {
    let method = PruneMethod::try_from(tag)?;
    prune_layer(layer, method, threshold, rng)
}

/// Gradient-importance pruning with gradients from `source`.
pub fn prune_layer_with_gradients<G: GradientSource + ?Sized>(
    layer: &mut Layer,
    source: &mut G,
    threshold: f32,
) -> Result<()> {
    layer.ensure_prunable()?;
    PruneMethod::Gradient.validate_threshold(threshold)?;
    let pruned = GradientPruner.select_with(layer.weights(), threshold, source)?;
    layer.replace_weights(pruned);
    Ok(())
}

/// Apply the same method and threshold to every layer.
///
/// New buffers for all layers are built before any is installed, so on error
/// the model is unchanged.
pub fn prune_model<R: Rng + ?Sized>(
    model: &mut Model,
    method: PruneMethod,
    threshold: f32,
    rng: &mut R,
) -> Result<()> {
    model.ensure_prunable()?;
    method.validate_threshold(threshold)?;
    info!(strategy = method.strategy_name(), threshold, layers = model.num_layers(), "pruning model");

    let buffers = model
        .layers()
        .iter()
        .map(|layer| method.apply(layer.weights(), threshold, rng))
        .collect::<Result<Vec<_>>>()?;

    log_sizes(model, &buffers);
    model.install(buffers);
    Ok(())
}

/// Like [`prune_model`], with layers processed on the rayon thread pool.
///
/// Randomized methods draw from one generator per layer seeded from `seed`
/// and the layer index, so the outcome does not depend on scheduling.
pub fn prune_model_parallel(
    model: &mut Model,
    method: PruneMethod,
    threshold: f32,
    seed: u64,
) -> Result<()> {
    model.ensure_prunable()?;
    method.validate_threshold(threshold)?;
    info!(strategy = method.strategy_name(), threshold, layers = model.num_layers(), "pruning model in parallel");

    let buffers = model
        .layers()
        .par_iter()
        .enumerate()
        .map(|(index, layer)| {
            let mut rng = layer_rng(seed, index);
            method.apply(layer.weights(), threshold, &mut rng)
        })
        .collect::<Result<Vec<_>>>()?;

    log_sizes(model, &buffers);
    model.install(buffers);
    Ok(())
}

/// Run a [`PruningConfig`] over every layer.
pub fn prune_model_with<R: Rng + ?Sized>(
    model: &mut Model,
    config: &PruningConfig,
    rng: &mut R,
) -> Result<()> {
    prune_model(model, config.method(), config.threshold(), rng)
}

/// Generator for layer `index` derived from a base seed.
pub fn layer_rng(seed: u64, index: usize) -> StdRng {
    StdRng::seed_from_u64(seed.wrapping_add(index as u64))
}

fn log_sizes(model: &Model, buffers: &[Vec<f32>]) {
    for (layer, buffer) in model.layers().iter().zip(buffers) {
        debug!(layer = layer.name(), original = layer.size(), pruned = buffer.len(), "pruned layer");
    }
}
