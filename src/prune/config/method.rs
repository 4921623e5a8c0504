//! Pruning method enumeration.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::prune::strategy::{
    EntropyPruner, GradientPruner, L1NormPruner, MagnitudePruner, PercentagePruner, PruneStrategy,
    RandomPruner, VariancePruner,
};
use crate::prune::{PruneError, Result};

/// Pruning method selection.
///
/// The threshold passed alongside a method is interpreted per method:
/// an absolute magnitude, a fraction to discard, a standard-deviation
/// multiplier, a fraction of the mean magnitude, an importance cutoff or an
/// entropy scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PruneMethod {
    /// Keep weights with `|w| > |threshold|`.
    #[default]
    Magnitude,

    /// Keep the top `floor(n * (1 - threshold))` weights by magnitude.
    Percentage,

    /// Keep `floor(n * (1 - threshold))` weights chosen uniformly at random.
    Random,

    /// Keep weights with `|w| > threshold * std_dev`.
    Variance,

    /// Keep weights with `|w| > threshold * l1_norm / n`.
    L1Norm,

    /// Keep weights with `|w * g| > threshold` for a simulated gradient `g`.
    Gradient,

    /// Shrink the layer in proportion to its normalized entropy.
    Entropy,
}

impl PruneMethod {
    /// Every method, in tag order.
    pub const ALL: [PruneMethod; 7] = [
        PruneMethod::Magnitude,
        PruneMethod::Percentage,
        PruneMethod::Random,
        PruneMethod::Variance,
        PruneMethod::L1Norm,
        PruneMethod::Gradient,
        PruneMethod::Entropy,
    ];

    /// Numeric tag of this method.
    pub fn tag(&self) -> u32 {
        match self {
            PruneMethod::Magnitude => 0,
            PruneMethod::Percentage => 1,
            PruneMethod::Random => 2,
            PruneMethod::Variance => 3,
            PruneMethod::L1Norm => 4,
            PruneMethod::Gradient => 5,
            PruneMethod::Entropy => 6,
        }
    }

    /// Get the display name for this method.
    pub fn display_name(&self) -> &'static str {
        match self {
            PruneMethod::Magnitude => "Magnitude",
            PruneMethod::Percentage => "Percentage",
            PruneMethod::Random => "Random",
            PruneMethod::Variance => "Variance",
            PruneMethod::L1Norm => "L1-Norm",
            PruneMethod::Gradient => "Gradient Importance",
            PruneMethod::Entropy => "Entropy",
        }
    }

    /// Snake-case name used in plans and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            PruneMethod::Magnitude => "magnitude",
            PruneMethod::Percentage => "percentage",
            PruneMethod::Random => "random",
            PruneMethod::Variance => "variance",
            PruneMethod::L1Norm => "l1_norm",
            PruneMethod::Gradient => "gradient",
            PruneMethod::Entropy => "entropy",
        }
    }

    /// Check if this method draws from the random source.
    pub fn is_randomized(&self) -> bool {
        matches!(self, PruneMethod::Random | PruneMethod::Gradient)
    }

    /// Check if the threshold is a fraction of weights to discard.
    pub fn takes_fraction(&self) -> bool {
        matches!(self, PruneMethod::Percentage | PruneMethod::Random)
    }

    /// Validate a threshold for this method without touching any weights.
    pub fn validate_threshold(&self, threshold: f32) -> Result<()> {
        if !threshold.is_finite() {
            return Err(PruneError::invalid(
                "threshold",
                format!("{threshold} is not finite ({} pruning)", self.as_str()),
            ));
        }
        if self.takes_fraction() && !(0.0..=1.0).contains(&threshold) {
            return Err(PruneError::invalid(
                "threshold",
                format!(
                    "{threshold} must be between 0.0 and 1.0 for {} pruning",
                    self.as_str()
                ),
            ));
        }
        Ok(())
    }

    /// Name of the strategy that implements this method, as used in logs.
    pub fn strategy_name(&self) -> &'static str {
        match self {
            PruneMethod::Magnitude => MagnitudePruner.name(),
            PruneMethod::Percentage => PercentagePruner.name(),
            PruneMethod::Random => RandomPruner.name(),
            PruneMethod::Variance => VariancePruner.name(),
            PruneMethod::L1Norm => L1NormPruner.name(),
            PruneMethod::Gradient => GradientPruner.name(),
            PruneMethod::Entropy => EntropyPruner.name(),
        }
    }

    /// Run this method's strategy over `weights`, returning the survivors.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        weights: &[f32],
        threshold: f32,
        rng: &mut R,
    ) -> Result<Vec<f32>> {
        self.validate_threshold(threshold)?;
        match self {
            PruneMethod::Magnitude => MagnitudePruner.select(weights, threshold, rng),
            PruneMethod::Percentage => PercentagePruner.select(weights, threshold, rng),
            PruneMethod::Random => RandomPruner.select(weights, threshold, rng),
            PruneMethod::Variance => VariancePruner.select(weights, threshold, rng),
            PruneMethod::L1Norm => L1NormPruner.select(weights, threshold, rng),
            PruneMethod::Gradient => GradientPruner.select(weights, threshold, rng),
            PruneMethod::Entropy => EntropyPruner.select(weights, threshold, rng),
        }
    }
}

impl fmt::Display for PruneMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for PruneMethod {
    type Error = PruneError;

    fn try_from(tag: u32) -> Result<Self> {
        PruneMethod::ALL
            .iter()
            .copied()
            .find(|method| method.tag() == tag)
            .ok_or_else(|| PruneError::UnknownMethod(format!("tag {tag}")))
    }
}

impl FromStr for PruneMethod {
    type Err = PruneError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "magnitude" => Ok(PruneMethod::Magnitude),
            "percentage" | "top_k" => Ok(PruneMethod::Percentage),
            "random" => Ok(PruneMethod::Random),
            "variance" => Ok(PruneMethod::Variance),
            "l1_norm" | "l1" => Ok(PruneMethod::L1Norm),
            "gradient" | "gradient_based" => Ok(PruneMethod::Gradient),
            "entropy" | "entropy_based" => Ok(PruneMethod::Entropy),
            _ => Err(PruneError::UnknownMethod(s.to_string())),
        }
    }
}
