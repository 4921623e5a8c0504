//! Run command implementation

use super::emit;
use crate::cli::logging::log;
use crate::cli::{LogLevel, RunArgs};
use crate::config::PlanConfig;
use crate::pipeline::run_plan;

pub fn run_plan_file(args: RunArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Verbose,
        &format!("Loading plan: {}", args.plan.display()),
    );

    let plan = PlanConfig::from_file(&args.plan).map_err(|e| format!("Plan error: {e}"))?;
    let outcome = run_plan(&plan).map_err(|e| format!("Run failed: {e}"))?;
    emit(&outcome, args.format, level)
}
