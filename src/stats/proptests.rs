//! Property-based tests for statistics kernels.

use super::*;
use proptest::collection::vec;
use proptest::prelude::*;

fn padded(values: &[f32], offset: usize) -> Vec<f32> {
    let mut window = values[offset..].to_vec();
    window.resize(values.len(), 0.0);
    window
}

proptest! {
    /// Correlation is bounded when defined
    #[test]
    fn pearson_bounded(x in vec(-1.0f32..1.0, 2..64), y in vec(-1.0f32..1.0, 2..64)) {
        if let Some(r) = pearson_correlation(&x, &y) {
            prop_assert!(r.abs() <= 1.0 + 1e-4, "correlation {} out of range", r);
        }
    }

    /// Suffix-sum windows agree with explicitly padded vectors
    #[test]
    fn windows_match_padding(values in vec(-1.0f32..1.0, 2..48), a in 0usize..48, b in 0usize..48) {
        let n = values.len();
        let (i, j) = (a % n, b % n);
        let windows = SuffixWindows::new(&values).unwrap();
        let expected = pearson_correlation(&padded(&values, i), &padded(&values, j));
        match (windows.correlation(i, j), expected) {
            (Some(got), Some(want)) => prop_assert!((got - want).abs() < 1e-3),
            (None, None) => {}
            (got, want) => {
                // Near-degenerate windows can fall on either side of the zero check.
                prop_assert!(got.is_none_or(|r| r.is_finite()) && want.is_none_or(|r| r.is_finite()));
            }
        }
    }

    /// Standard deviation is non-negative and zero for constant buffers
    #[test]
    fn std_dev_non_negative(values in vec(-10.0f32..10.0, 1..128), c in -5.0f32..5.0) {
        prop_assert!(std_dev(&values) >= 0.0);
        prop_assert!(std_dev(&vec![c; values.len()]) < 1e-5);
    }

    /// Mean absolute value never exceeds the maximum magnitude
    #[test]
    fn l1_over_n_bounded_by_max(values in vec(-10.0f32..10.0, 1..128)) {
        let max = values.iter().fold(0.0f32, |acc, v| acc.max(v.abs()));
        prop_assert!(l1_norm(&values) / values.len() as f32 <= max + 1e-4);
    }

    /// Entropy of unit-bounded weights stays in [0, 1]
    #[test]
    fn entropy_unit_weights_bounded(values in vec(-1.0f32..1.0, 3..256)) {
        let e = entropy(&values);
        prop_assert!((0.0..=1.0 + 1e-5).contains(&e), "entropy {} out of range", e);
    }
}
