//! Podar: weight pruning and redundancy compression for layered models
//!
//! A model is an ordered list of layers, each a flat buffer of `f32`
//! weights. Pruning drops individual weights by a per-method keep rule;
//! compression drops weights whose zero-padded windows correlate with an
//! already kept weight. Both shrink buffers in place and never reorder the
//! survivors of the order-preserving methods.
//!
//! # Modules
//!
//! - [`model`]: layers and models
//! - [`stats`]: mean, standard deviation, L1 norm, entropy, correlation
//! - [`prune`]: the seven pruning methods and model-level drivers
//! - [`compress`]: correlation-based redundancy elimination
//! - [`report`]: size snapshots and before/after diffs
//! - [`config`]: YAML plan files
//! - [`pipeline`]: plan execution
//! - [`cli`]: the `podar` command line
//!
//! # Example
//!
//! ```
//! use podar::compress::compress_model;
//! use podar::model::Model;
//!
//! let mut model = Model::seeded(&[1000, 500, 100], 42)?;
//! compress_model(&mut model, 0.1)?;
//! assert!(model.layer_sizes().iter().all(|&size| size >= 1));
//! # Ok::<(), podar::prune::PruneError>(())
//! ```

pub mod cli;
pub mod compress;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod prune;
pub mod report;
pub mod stats;

pub use error::{Error, Result};
