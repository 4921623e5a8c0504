//! Redundancy compression
//!
//! Removes weights whose windows correlate strongly with an already kept
//! weight of the same layer. Unlike pruning, the decision for a weight
//! depends on the weights kept before it.
//!
//! For a layer of length `n`, weight `i` stands for the length-`n` window of
//! the layer buffer starting at offset `i`; positions past the end of the
//! buffer read as zero. Every pair is therefore compared over `n` samples.
//!
//! Cost is O(n^2) pairs with an O(n) cross term each, which makes this the
//! expensive path for large layers. Use [`compress_model_parallel`] to spread
//! layers across threads.

mod redundancy;


pub use redundancy::{compress_layer, compress_model, compress_model_parallel, compress_weights};
