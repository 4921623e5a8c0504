//! Model size reports
//!
//! Read-only snapshots of layer sizes, used to show what a pruning or
//! compression run did.

use serde::{Deserialize, Serialize};

use crate::model::Model;


/// Size of one layer at the time of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerReport {
    /// Position in the model.
    pub index: usize,
    /// Layer name.
    pub name: String,
    /// Number of live weights.
    pub size: usize,
}

/// Per-layer sizes of a model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelReport {
    /// One entry per layer, in model order.
    pub layers: Vec<LayerReport>,
    /// Sum of all layer sizes.
    pub total_parameters: usize,
}

impl ModelReport {
    /// Snapshot the current layer sizes of `model`.
    pub fn from_model(model: &Model) -> Self {
        let layers = model
            .layers()
            .iter()
            .enumerate()
            .map(|(index, layer)| LayerReport {
                index,
                name: layer.name().to_string(),
                size: layer.size(),
            })
            .collect();
        Self { layers, total_parameters: model.total_parameters() }
    }

    /// Plain listing, one line per layer.
    pub fn render(&self) -> String {
        let mut output = String::from("Model structure:\n");
        for layer in &self.layers {
            output.push_str(&format!("Layer {}: {} neurons\n", layer.index, layer.size));
        }
        output
    }
}

/// A before/after pair of reports for the same model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDiff {
    pub before: ModelReport,
    pub after: ModelReport,
}

impl ReportDiff {
    /// Pair two snapshots of the same model.
    pub fn new(before: ModelReport, after: ModelReport) -> Self {
        Self { before, after }
    }

    /// Fraction of weights kept in each layer.
    pub fn layer_retention(&self) -> Vec<f32> {
        self.before
            .layers
            .iter()
            .zip(&self.after.layers)
            .map(|(before, after)| ratio(after.size, before.size))
            .collect()
    }

    /// Fraction of weights kept across the whole model.
    pub fn overall_retention(&self) -> f32 {
        ratio(self.after.total_parameters, self.before.total_parameters)
    }

    /// Number of weights removed.
    pub fn parameters_removed(&self) -> usize {
        self.before.total_parameters.saturating_sub(self.after.total_parameters)
    }

    /// Table with one row per layer and a total row.
    pub fn render_table(&self) -> String {
        let rule = "────────────────────────────────────────────────────────────\n";
        let mut output = String::new();
        output.push_str(&format!(
            "{:<6} | {:<12} | {:>10} | {:>10} | {:>8}\n",
            "Layer", "Name", "Before", "After", "Kept"
        ));
        output.push_str(rule);

        for ((before, after), kept) in
            self.before.layers.iter().zip(&self.after.layers).zip(self.layer_retention())
        {
            output.push_str(&format!(
                "{:<6} | {:<12} | {:>10} | {:>10} | {:>7.1}%\n",
                before.index,
                before.name,
                before.size,
                after.size,
                kept * 100.0
            ));
        }

        output.push_str(rule);
        output.push_str(&format!(
            "{:<6} | {:<12} | {:>10} | {:>10} | {:>7.1}%\n",
            "Total",
            "",
            self.before.total_parameters,
            self.after.total_parameters,
            self.overall_retention() * 100.0
        ));
        output
    }
}

fn ratio(kept: usize, total: usize) -> f32 {
    if total == 0 {
        1.0
    } else {
        kept as f32 / total as f32
    }
}
