//! YAML plan files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::prune::{PruneMethod, PruningConfig};

fn default_seed() -> u64 {
    42
}

/// A model description plus the steps to run on it.
///
/// # Example
///
/// ```
/// use podar::config::{PlanConfig, PlanStep};
///
/// let plan = PlanConfig::from_yaml(
///     "layers: [1000, 500, 100]\nsteps:\n  - op: compress\n    threshold: 0.1\n",
/// )?;
/// assert_eq!(plan.seed, 42);
/// assert_eq!(plan.steps, vec![PlanStep::Compress { threshold: 0.1 }]);
/// # Ok::<(), podar::error::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// Seed for model initialization and randomized methods.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Size of each layer, in order.
    pub layers: Vec<usize>,

    /// Process layers on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,

    /// Steps, run in order.
    pub steps: Vec<PlanStep>,
}

/// One operation of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PlanStep {
    /// Prune every layer with `method`.
    Prune { method: PruneMethod, threshold: f32 },
    /// Remove correlated weights from every layer.
    Compress { threshold: f32 },
}

impl PlanStep {
    /// Short label used in logs and reports.
    pub fn label(&self) -> String {
        match self {
            PlanStep::Prune { method, threshold } => format!("prune {method} @ {threshold}"),
            PlanStep::Compress { threshold } => format!("compress @ {threshold}"),
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            PlanStep::Prune { method, threshold } => {
                PruningConfig::new(method, threshold).validate()?;
            }
            PlanStep::Compress { threshold } => {
                if !threshold.is_finite() {
                    return Err(Error::ConfigError(format!(
                        "compress threshold {threshold} is not finite"
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for PlanConfig {
    /// The two-pass run over a `{1000, 500, 100}` model.
    fn default() -> Self {
        Self {
            seed: default_seed(),
            layers: vec![1000, 500, 100],
            parallel: false,
            steps: vec![
                PlanStep::Compress { threshold: 0.1 },
                PlanStep::Prune { method: PruneMethod::Magnitude, threshold: 0.1 },
            ],
        }
    }
}

impl PlanConfig {
    /// Parse a plan from YAML text and validate it.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let plan: PlanConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::ConfigError(format!("Failed to parse YAML plan: {e}")))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Read, parse and validate a plan file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read plan file {}", path.display()), e))?;
        Self::from_yaml(&yaml)
    }

    /// Serialize the plan back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the layer sizes.
    pub fn with_layers(mut self, layers: Vec<usize>) -> Self {
        self.layers = layers;
        self
    }

    /// Enable or disable per-layer parallelism.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Replace the step list.
    pub fn with_steps(mut self, steps: Vec<PlanStep>) -> Self {
        self.steps = steps;
        self
    }

    /// Check layer sizes and every step.
    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(Error::ConfigError("layers cannot be empty".into()));
        }
        if let Some(index) = self.layers.iter().position(|&size| size == 0) {
            return Err(Error::ConfigError(format!("layer {index} has size 0")));
        }
        if self.steps.is_empty() {
            return Err(Error::ConfigError("steps cannot be empty".into()));
        }
        for (index, step) in self.steps.iter().enumerate() {
            step.validate().map_err(|e| {
                Error::ConfigError(format!("step {index} ({}): {e}", step.label()))
            })?;
        }
        Ok(())
    }
}
