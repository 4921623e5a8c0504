//! Statistics kernels
//!
//! Pure functions over weight buffers, shared by every pruning strategy and
//! by the redundancy compressor. None of them allocate except
//! [`SuffixWindows::new`], which reports allocation failure to its caller.

mod correlation;
mod kernels;

#[cfg(test)]
mod proptests;

pub use correlation::{pearson_correlation, SuffixWindows};
pub use kernels::{entropy, l1_norm, mean, std_dev};
