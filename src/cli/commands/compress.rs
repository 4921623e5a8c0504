//! Compress command implementation

use super::emit;
use super::prune::plan_from_args;
use crate::cli::{CompressArgs, LogLevel};
use crate::config::PlanStep;
use crate::pipeline::run_plan;

pub fn run_compress(args: CompressArgs, level: LogLevel) -> Result<(), String> {
    let plan = plan_from_args(&args.model, PlanStep::Compress { threshold: args.threshold });
    let outcome = run_plan(&plan).map_err(|e| format!("Compression failed: {e}"))?;
    emit(&outcome, args.model.format, level)
}
