//! Layer store
//!
//! Owns the weight buffers the engine operates on. A [`Layer`] holds exactly
//! one buffer; every pruning or compression pass replaces it with a new,
//! smaller one.

mod core;
mod layer;


pub use self::core::Model;
pub use layer::Layer;
