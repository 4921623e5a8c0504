//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::prune::PruneMethod;

/// Podar: weight pruning and redundancy compression for layered models
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "podar")]
#[command(version)]
#[command(about = "Weight pruning and correlation-based compression for layered models")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Execute a YAML plan and print the size report
    Run(RunArgs),

    /// Parse and validate a plan file without running it
    Validate(ValidateArgs),

    /// Prune a freshly initialized model
    Prune(PruneArgs),

    /// Compress a freshly initialized model
    Compress(CompressArgs),

    /// Compress a {1000, 500, 100} model at threshold 0.1 and show its structure
    Demo,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to YAML plan file
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML plan file
    #[arg(value_name = "PLAN")]
    pub plan: PathBuf,
}

/// Model shape shared by the prune and compress commands
#[derive(clap::Args, Debug, Clone, PartialEq)]
pub struct ModelArgs {
    /// Comma-separated layer sizes
    #[arg(long, value_delimiter = ',', default_values_t = [1000, 500, 100])]
    pub layers: Vec<usize>,

    /// Seed for initialization and randomized methods
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Process layers in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the prune command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PruneArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Pruning method (magnitude, percentage, random, variance, l1_norm, gradient, entropy)
    #[arg(short, long, default_value = "magnitude", value_parser = parse_method)]
    pub method: PruneMethod,

    /// Method-specific threshold
    #[arg(short, long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub threshold: f32,
}

/// Arguments for the compress command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct CompressArgs {
    #[command(flatten)]
    pub model: ModelArgs,

    /// Correlation threshold
    #[arg(short, long, default_value_t = 0.1, allow_negative_numbers = true)]
    pub threshold: f32,
}

fn parse_method(s: &str) -> Result<PruneMethod, String> {
    s.parse().map_err(|e: crate::prune::PruneError| e.to_string())
}

/// Parse command line arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
