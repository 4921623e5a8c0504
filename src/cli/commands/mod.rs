//! CLI command implementations

mod compress;
mod demo;
mod prune;
mod run;
mod validate;


use crate::cli::logging::{init_tracing, log};
use crate::cli::{Cli, Command, LogLevel, OutputFormat};
use crate::pipeline::PlanOutcome;

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);
    init_tracing(log_level);

    match cli.command {
        Command::Run(args) => run::run_plan_file(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
        Command::Prune(args) => prune::run_prune(args, log_level),
        Command::Compress(args) => compress::run_compress(args, log_level),
        Command::Demo => demo::run_demo(log_level),
    }
}

/// Print an outcome in the requested format.
///
/// JSON is printed even in quiet mode since it is the command's result.
fn emit(outcome: &PlanOutcome, format: OutputFormat, level: LogLevel) -> Result<(), String> {
    match format {
        OutputFormat::Text => log(level, LogLevel::Normal, &outcome.render_text()),
        OutputFormat::Json => {
            let json = outcome.to_json().map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}
