//! Demo command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{PlanConfig, PlanStep};
use crate::pipeline::run_plan;

/// The demo plan: one compression pass at 0.1 over `{1000, 500, 100}`.
pub fn demo_plan() -> PlanConfig {
    PlanConfig::default().with_steps(vec![PlanStep::Compress { threshold: 0.1 }])
}

pub fn run_demo(level: LogLevel) -> Result<(), String> {
    let outcome = run_plan(&demo_plan()).map_err(|e| format!("Demo failed: {e}"))?;

    log(level, LogLevel::Normal, &outcome.before.render());
    log(level, LogLevel::Normal, "Compressing model...\n");
    log(level, LogLevel::Normal, &outcome.after.render());
    log(level, LogLevel::Verbose, &outcome.diff().render_table());
    Ok(())
}
