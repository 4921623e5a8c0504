//! Property-based tests for weight selection strategies.

use super::*;
use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// True if `kept` is a subsequence of `weights`, compared bit for bit.
fn is_ordered_subset(kept: &[f32], weights: &[f32]) -> bool {
    let mut source = weights.iter();
    kept.iter().all(|k| source.any(|w| w.to_bits() == k.to_bits()))
}

proptest! {
    /// Filters only select, never transform, and keep relative order
    #[test]
    fn filters_are_ordered_subsets(
        weights in vec(-1.0f32..1.0, 1..200),
        threshold in 0.0f32..2.0,
        seed in any::<u64>(),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let magnitude = MagnitudePruner.select(&weights, threshold, &mut rng).unwrap();
        let variance = VariancePruner.select(&weights, threshold, &mut rng).unwrap();
        let l1 = L1NormPruner.select(&weights, threshold, &mut rng).unwrap();
        let gradient = GradientPruner.select(&weights, threshold, &mut rng).unwrap();
        let random = RandomPruner.select(&weights, threshold.min(1.0), &mut rng).unwrap();

        for kept in [&magnitude, &variance, &l1, &gradient, &random] {
            prop_assert!(kept.len() <= weights.len());
            prop_assert!(is_ordered_subset(kept, &weights));
        }
    }

    /// Percentage keeps exactly floor(n * (1 - p)) weights, all at least as large as any dropped one
    #[test]
    fn percentage_keeps_largest(weights in vec(-1.0f32..1.0, 1..200), p in 0.0f32..=1.0) {
        let mut rng = StdRng::seed_from_u64(0);
        let kept = PercentagePruner.select(&weights, p, &mut rng).unwrap();
        prop_assert_eq!(kept.len(), retained_count(weights.len(), p).unwrap());
        prop_assert!(kept.windows(2).all(|w| w[0].abs() >= w[1].abs()));

        if let Some(smallest_kept) = kept.last() {
            let larger = weights.iter().filter(|w| w.abs() > smallest_kept.abs()).count();
            prop_assert!(larger <= kept.len());
        }
    }

    /// Entropy pruning never drops below its target size and never grows the layer
    #[test]
    fn entropy_at_least_target(weights in vec(-1.0f32..1.0, 1..200), t in 0.0f32..3.0) {
        let mut rng = StdRng::seed_from_u64(0);
        let target = EntropyPruner::target_size(&weights, t);
        let kept = EntropyPruner.select(&weights, t, &mut rng).unwrap();
        prop_assert!(kept.len() >= target);
        prop_assert!(kept.len() <= weights.len());
        prop_assert!(is_ordered_subset(&kept, &weights));
    }

    /// Deterministic strategies give identical output for identical input
    #[test]
    fn deterministic_strategies_reproducible(
        weights in vec(-1.0f32..1.0, 1..100),
        t in 0.0f32..1.0,
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
    ) {
        let mut a = StdRng::seed_from_u64(seed_a);
        let mut b = StdRng::seed_from_u64(seed_b);
        prop_assert_eq!(
            MagnitudePruner.select(&weights, t, &mut a).unwrap(),
            MagnitudePruner.select(&weights, t, &mut b).unwrap()
        );
        prop_assert_eq!(
            PercentagePruner.select(&weights, t, &mut a).unwrap(),
            PercentagePruner.select(&weights, t, &mut b).unwrap()
        );
        prop_assert_eq!(
            VariancePruner.select(&weights, t, &mut a).unwrap(),
            VariancePruner.select(&weights, t, &mut b).unwrap()
        );
        prop_assert_eq!(
            L1NormPruner.select(&weights, t, &mut a).unwrap(),
            L1NormPruner.select(&weights, t, &mut b).unwrap()
        );
        prop_assert_eq!(
            EntropyPruner.select(&weights, t, &mut a).unwrap(),
            EntropyPruner.select(&weights, t, &mut b).unwrap()
        );
    }

    /// Magnitude pruning at zero threshold is idempotent
    #[test]
    fn magnitude_zero_threshold_idempotent(weights in vec(prop_oneof![Just(0.0f32), -1.0f32..1.0], 1..100)) {
        let mut rng = StdRng::seed_from_u64(0);
        let once = MagnitudePruner.select(&weights, 0.0, &mut rng).unwrap();
        let twice = MagnitudePruner.select(&once, 0.0, &mut rng).unwrap();
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|w| *w != 0.0));
    }
}
