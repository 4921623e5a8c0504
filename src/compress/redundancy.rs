//! Greedy correlation-based redundancy elimination.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::model::{Layer, Model};
use crate::prune::strategy::alloc_buffer;
use crate::prune::{PruneError, Result};
use crate::stats::SuffixWindows;

/// Select the non-redundant weights of one buffer.
///
/// Weight `i` is compared against every earlier kept weight `j` through the
/// correlation of their zero-padded windows. The first `|r| > threshold`
/// rejects `i`. Degenerate correlations never reject.
pub fn compress_weights(weights: &[f32], threshold: f32) -> Result<Vec<f32>> {
    validate_threshold(threshold)?;
    let windows = SuffixWindows::new(weights)
        .map_err(|_| PruneError::AllocationFailed { requested: weights.len() + 1 })?;

    let mut kept: Vec<usize> = alloc_buffer(weights.len())?;
    for i in 0..weights.len() {
        let redundant = kept
            .iter()
            .any(|&j| windows.correlation(i, j).is_some_and(|r| r.abs() > threshold));
        if !redundant {
            kept.push(i);
        }
    }

    let mut compressed = alloc_buffer(kept.len())?;
    compressed.extend(kept.iter().map(|&i| weights[i]));
    Ok(compressed)
}

/// Compress one layer in place.
pub fn compress_layer(layer: &mut Layer, threshold: f32) -> Result<()> {
    layer.ensure_prunable()?;
    let compressed = compress_weights(layer.weights(), threshold)?;
    debug!(
        layer = layer.name(),
        original = layer.size(),
        compressed = compressed.len(),
        "compressed layer"
    );
    layer.replace_weights(compressed);
    Ok(())
}

/// Compress every layer of the model.
///
/// All layers are compressed before any buffer is installed; on error the
/// model is unchanged.
pub fn compress_model(model: &mut Model, threshold: f32) -> Result<()> {
    model.ensure_prunable()?;
    validate_threshold(threshold)?;
    info!(threshold, layers = model.num_layers(), "starting compression");

    let buffers = model
        .layers()
        .iter()
        .map(|layer| compress_weights(layer.weights(), threshold))
        .collect::<Result<Vec<_>>>()?;

    finish(model, buffers);
    Ok(())
}

/// Like [`compress_model`], with layers processed on the rayon thread pool.
pub fn compress_model_parallel(model: &mut Model, threshold: f32) -> Result<()> {
    model.ensure_prunable()?;
    validate_threshold(threshold)?;
    info!(threshold, layers = model.num_layers(), "starting parallel compression");

    let buffers = model
        .layers()
        .par_iter()
        .map(|layer| compress_weights(layer.weights(), threshold))
        .collect::<Result<Vec<_>>>()?;

    finish(model, buffers);
    Ok(())
}

fn finish(model: &mut Model, buffers: Vec<Vec<f32>>) {
    for (layer, buffer) in model.layers().iter().zip(&buffers) {
        debug!(
            layer = layer.name(),
            original = layer.size(),
            compressed = buffer.len(),
            "compressed layer"
        );
    }
    model.install(buffers);
    info!(parameters = model.total_parameters(), "compression completed");
}

fn validate_threshold(threshold: f32) -> Result<()> {
    if !threshold.is_finite() {
        return Err(PruneError::invalid(
            "threshold",
            format!("{threshold} is not finite (compression)"),
        ));
    }
    Ok(())
}
