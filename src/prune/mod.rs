//! Weight pruning for layered models
//!
//! Each pruning method decides, per weight, whether it survives. The survivors
//! form a new buffer that replaces the layer's old one. Seven methods are
//! available:
//!
//! - **Magnitude**: absolute cutoff
//! - **Percentage**: keep the top fraction by magnitude
//! - **Random**: keep a uniformly chosen fraction
//! - **Variance**: cutoff relative to the standard deviation
//! - **L1-norm**: cutoff relative to the mean magnitude
//! - **Gradient**: cutoff on `|w * g|` with simulated or supplied gradients
//! - **Entropy**: shrink in proportion to the layer's normalized entropy
//!
//! # Example
//!
//! ```
//! use podar::model::Model;
//! use podar::prune::{prune_model, PruneMethod};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut model = Model::random(&[1000, 500, 100], &mut rng)?;
//! prune_model(&mut model, PruneMethod::Percentage, 0.3, &mut rng)?;
//! assert_eq!(model.layer_sizes(), vec![700, 350, 70]);
//! # Ok::<(), podar::prune::PruneError>(())
//! ```
//!
//! # References
//!
//! - Han, S., et al. (2015). Learning both weights and connections. NeurIPS.
//! - Molchanov, P., et al. (2017). Pruning convolutional neural networks for
//!   resource efficient inference. ICLR.

mod config;
mod engine;
mod error;
pub mod strategy;


pub use config::{PruneMethod, PruningConfig};
pub use engine::{
    layer_rng, prune_layer, prune_layer_tag, prune_layer_with_gradients, prune_model,
    prune_model_parallel, prune_model_with,
};
pub use error::{PruneError, Result};
pub use strategy::{GradientSource, ProvidedGradients, PruneStrategy, SimulatedGradients};
