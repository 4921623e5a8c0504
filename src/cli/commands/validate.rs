//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::{LogLevel, ValidateArgs};
use crate::config::PlanConfig;

/// One-line-per-field summary of a plan.
pub fn format_plan_summary(plan: &PlanConfig) -> String {
    let mut lines = vec![
        format!("  Seed: {}", plan.seed),
        format!("  Layers: {:?}", plan.layers),
        format!("  Parallel: {}", plan.parallel),
        format!("  Steps: {}", plan.steps.len()),
    ];
    for (index, step) in plan.steps.iter().enumerate() {
        lines.push(format!("    {index}: {}", step.label()));
    }
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating plan: {}", args.plan.display()),
    );

    let plan = PlanConfig::from_file(&args.plan).map_err(|e| format!("Validation failed: {e}"))?;

    log(level, LogLevel::Normal, "Plan is valid");
    log(level, LogLevel::Verbose, &format_plan_summary(&plan));
    Ok(())
}
