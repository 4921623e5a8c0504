//! Pruning configuration module
//!
//! Provides the method selector and its threshold.

mod method;
mod pruning_config;


// Re-export all public types
pub use method::PruneMethod;
pub use pruning_config::PruningConfig;
