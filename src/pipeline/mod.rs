//! Plan pipeline
//!
//! Runs the steps of a [`PlanConfig`](crate::config::PlanConfig) in order
//! and records the model's layer sizes after each one.

mod runner;


pub use runner::{run_plan, run_steps, PlanOutcome, StepReport};
