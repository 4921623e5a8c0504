//! CLI module for podar
//!
//! This module contains the argument definitions, command handlers and
//! logging setup for the `podar` binary.

mod args;
mod commands;
mod logging;


pub use args::{
    parse_args, Cli, Command, CompressArgs, ModelArgs, OutputFormat, PruneArgs, RunArgs,
    ValidateArgs,
};
pub use commands::run_command;
pub use logging::{init_tracing, LogLevel};
