//! Plan execution.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::compress::{compress_model, compress_model_parallel};
use crate::config::{PlanConfig, PlanStep};
use crate::error::{Error, Result};
use crate::model::Model;
use crate::prune::{prune_model, prune_model_parallel};
use crate::report::{ModelReport, ReportDiff};

/// Model sizes after one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    /// Position of the step in the plan.
    pub index: usize,
    /// Human-readable step description.
    pub label: String,
    /// Model sizes once the step finished.
    pub report: ModelReport,
}

/// Everything a plan run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    /// Sizes of the freshly initialized model.
    pub before: ModelReport,
    /// One entry per executed step.
    pub steps: Vec<StepReport>,
    /// Sizes after the last step.
    pub after: ModelReport,
}

impl PlanOutcome {
    /// Before/after comparison of the whole run.
    pub fn diff(&self) -> ReportDiff {
        ReportDiff::new(self.before.clone(), self.after.clone())
    }

    /// Text summary: initial structure, one line per step, then a table.
    pub fn render_text(&self) -> String {
        let mut output = self.before.render();
        output.push('\n');
        for step in &self.steps {
            output.push_str(&format!(
                "Step {}: {} -> {} parameters\n",
                step.index, step.label, step.report.total_parameters
            ));
        }
        output.push('\n');
        output.push_str(&self.after.render());
        output.push('\n');
        output.push_str(&self.diff().render_table());
        output
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

/// Build the plan's model from its seed and run every step on it.
///
/// One `StdRng` seeded from `plan.seed` initializes the model and feeds the
/// randomized methods, so a plan always produces the same outcome.
pub fn run_plan(plan: &PlanConfig) -> Result<PlanOutcome> {
    plan.validate()?;
    let mut rng = StdRng::seed_from_u64(plan.seed);
    let mut model = Model::random(&plan.layers, &mut rng)?;
    run_steps(&mut model, &plan.steps, plan.parallel, &mut rng)
}

/// Run `steps` on an existing model.
///
/// With `parallel` set, each step draws a fresh seed from `rng` and hands it
/// to the per-layer parallel variant. A failing step leaves the model as the
/// previous step left it.
pub fn run_steps<R: Rng + ?Sized>(
    model: &mut Model,
    steps: &[PlanStep],
    parallel: bool,
    rng: &mut R,
) -> Result<PlanOutcome> {
    let before = ModelReport::from_model(model);
    let mut reports = Vec::with_capacity(steps.len());

    for (index, step) in steps.iter().enumerate() {
        let label = step.label();
        info!(step = index, op = %label, parallel, "running step");

        match *step {
            PlanStep::Prune { method, threshold } if parallel => {
                let seed: u64 = rng.random();
                prune_model_parallel(model, method, threshold, seed)?;
            }
            PlanStep::Prune { method, threshold } => {
                prune_model(model, method, threshold, rng)?;
            }
            PlanStep::Compress { threshold } if parallel => {
                compress_model_parallel(model, threshold)?;
            }
            PlanStep::Compress { threshold } => {
                compress_model(model, threshold)?;
            }
        }

        reports.push(StepReport { index, label, report: ModelReport::from_model(model) });
    }

    let after = ModelReport::from_model(model);
    info!(
        before = before.total_parameters,
        after = after.total_parameters,
        "plan finished"
    );
    Ok(PlanOutcome { before, steps: reports, after })
}
