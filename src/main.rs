//! Podar CLI
//!
//! # Usage
//!
//! ```bash
//! # Run a YAML plan
//! podar run plan.yaml --format json
//!
//! # Validate a plan without running it
//! podar validate plan.yaml
//!
//! # Prune a {1000, 500, 100} model, keeping the top 70% of each layer
//! podar prune --layers 1000,500,100 --method percentage --threshold 0.3
//!
//! # Compress in parallel
//! podar compress --threshold 0.1 --parallel
//!
//! # Compress the demo model and show its structure
//! podar demo
//! ```

use clap::Parser;
use podar::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
