//! Prune command implementation

use super::emit;
use crate::cli::{LogLevel, ModelArgs, PruneArgs};
use crate::config::{PlanConfig, PlanStep};
use crate::pipeline::run_plan;

/// Single-step plan described by command-line flags.
pub(super) fn plan_from_args(model: &ModelArgs, step: PlanStep) -> PlanConfig {
    PlanConfig::default()
        .with_seed(model.seed)
        .with_layers(model.layers.clone())
        .with_parallel(model.parallel)
        .with_steps(vec![step])
}

pub fn run_prune(args: PruneArgs, level: LogLevel) -> Result<(), String> {
    let step = PlanStep::Prune { method: args.method, threshold: args.threshold };
    let plan = plan_from_args(&args.model, step);
    let outcome = run_plan(&plan).map_err(|e| format!("Pruning failed: {e}"))?;
    emit(&outcome, args.model.format, level)
}
