//! Plan configuration
//!
//! A plan names the layer sizes of a synthetic model, a seed and the
//! pruning and compression steps to run, loaded from YAML:
//!
//! ```yaml
//! seed: 42
//! layers: [1000, 500, 100]
//! parallel: false
//! steps:
//!   - op: compress
//!     threshold: 0.1
//!   - op: prune
//!     method: percentage
//!     threshold: 0.3
//! ```

mod plan;


pub use plan::{PlanConfig, PlanStep};
