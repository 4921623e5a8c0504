//! Tests for weight selection strategies.

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

// =========================================================================
// Magnitude
// =========================================================================

#[test]
fn test_magnitude_keeps_above_cutoff_in_order() {
    // TEST_ID: STR-001
    let weights = [0.5, -0.05, 0.2, -0.8, 0.01];
    let kept = MagnitudePruner.select(&weights, 0.1, &mut rng()).unwrap();
    assert_eq!(kept, vec![0.5, 0.2, -0.8], "STR-001 FALSIFIED: magnitude filter");
}

#[test]
fn test_magnitude_ignores_threshold_sign() {
    let weights = [0.5, -0.05, 0.2, -0.8, 0.01];
    let positive = MagnitudePruner.select(&weights, 0.1, &mut rng()).unwrap();
    let negative = MagnitudePruner.select(&weights, -0.1, &mut rng()).unwrap();
    assert_eq!(positive, negative);
}

#[test]
fn test_magnitude_cutoff_is_strict() {
    let kept = MagnitudePruner.select(&[0.1, -0.1, 0.2], 0.1, &mut rng()).unwrap();
    assert_eq!(kept, vec![0.2]);
}

#[test]
fn test_magnitude_zero_threshold_drops_only_zeros() {
    let kept = MagnitudePruner.select(&[0.0, 0.3, -0.0, -0.4], 0.0, &mut rng()).unwrap();
    assert_eq!(kept, vec![0.3, -0.4]);
}

// =========================================================================
// Percentage
// =========================================================================

#[test]
fn test_percentage_exact_top_k() {
    // TEST_ID: STR-010
    // floor(10 * 0.7) = 7; equal magnitudes keep ascending index order.
    let weights = [0.1, -0.9, 0.5, -0.5, -0.3, 0.7, 0.0, 0.5, 0.2, 0.05];
    let kept = PercentagePruner.select(&weights, 0.3, &mut rng()).unwrap();
    assert_eq!(
        kept,
        vec![-0.9, 0.7, 0.5, -0.5, 0.5, -0.3, 0.2],
        "STR-010 FALSIFIED: top-7 by magnitude with stable ties"
    );
}

#[test]
fn test_percentage_bounds() {
    let weights = [0.3, -0.1, 0.2];
    assert!(PercentagePruner.select(&weights, 1.0, &mut rng()).unwrap().is_empty());
    assert_eq!(PercentagePruner.select(&weights, 0.0, &mut rng()).unwrap(), vec![0.3, 0.2, -0.1]);
}

#[test]
fn test_percentage_rejects_out_of_range() {
    let weights = [0.3, -0.1, 0.2];
    assert!(PercentagePruner.select(&weights, -0.5, &mut rng()).is_err());
    assert!(PercentagePruner.select(&weights, 1.01, &mut rng()).is_err());
}

#[test]
fn test_retained_count_truncates() {
    assert_eq!(retained_count(10, 0.3).unwrap(), 7);
    assert_eq!(retained_count(3, 0.5).unwrap(), 1);
    assert_eq!(retained_count(1, 0.0).unwrap(), 1);
    assert_eq!(retained_count(0, 0.5).unwrap(), 0);
    assert!(retained_count(10, f32::NAN).is_err());
}

#[test]
fn test_retained_count_exact_for_large_layers() {
    // TEST_ID: STR-012
    let n = (1 << 24) + 1;
    assert_eq!(retained_count(n, 0.0).unwrap(), n, "STR-012 FALSIFIED: p = 0 keeps every weight");
    assert_eq!(retained_count(n, 0.5).unwrap(), n / 2);
    assert_eq!(retained_count(n, 1.0).unwrap(), 0);
    assert_eq!(retained_count(4096 * 11008, 0.0).unwrap(), 4096 * 11008);
}

#[test]
fn test_retained_count_reference_sizes() {
    assert_eq!(retained_count(1000, 0.3).unwrap(), 700);
    assert_eq!(retained_count(500, 0.3).unwrap(), 350);
    assert_eq!(retained_count(100, 0.3).unwrap(), 70);
    assert_eq!(retained_count(10, 0.7).unwrap(), 3);
    assert_eq!(retained_count(10, 0.9).unwrap(), 1);
}

#[test]
fn test_keep_count_clamps() {
    assert_eq!(keep_count(10, -0.5), 10);
    assert_eq!(keep_count(10, 2.0), 0);
    assert_eq!(keep_count(10, f64::NAN), 0);
    assert_eq!(keep_count(0, 0.0), 0);
}

#[test]
fn test_written_value_uses_shortest_decimal() {
    assert_eq!(written_value(0.3), 0.3);
    assert_eq!(written_value(0.0), 0.0);
    assert_eq!(written_value(0.125), 0.125);
}

// =========================================================================
// Random
// =========================================================================

#[test]
fn test_random_keeps_exact_count_in_order() {
    // TEST_ID: STR-020
    let weights: Vec<f32> = (0..100).map(|i| i as f32).collect();
    let kept = RandomPruner.select(&weights, 0.25, &mut rng()).unwrap();
    assert_eq!(kept.len(), 75, "STR-020 FALSIFIED: floor(100 * 0.75) survivors");
    assert!(kept.windows(2).all(|w| w[0] < w[1]), "STR-020 FALSIFIED: ascending index order");
}

#[test]
fn test_random_same_seed_same_selection() {
    let weights: Vec<f32> = (0..50).map(|i| i as f32 * 0.1).collect();
    let a = RandomPruner.select(&weights, 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
    let b = RandomPruner.select(&weights, 0.5, &mut StdRng::seed_from_u64(9)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_random_full_and_empty() {
    let weights = [1.0, 2.0, 3.0];
    assert_eq!(RandomPruner.select(&weights, 0.0, &mut rng()).unwrap(), vec![1.0, 2.0, 3.0]);
    assert!(RandomPruner.select(&weights, 1.0, &mut rng()).unwrap().is_empty());
}

// =========================================================================
// Variance
// =========================================================================

#[test]
fn test_variance_uses_population_std() {
    // TEST_ID: STR-030
    // std = 2.0, cutoff = 4.0
    let weights = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let kept = VariancePruner.select(&weights, 2.0, &mut rng()).unwrap();
    assert_eq!(kept, vec![5.0, 5.0, 7.0, 9.0], "STR-030 FALSIFIED: |w| > 2 * std");
}

#[test]
fn test_variance_zero_spread_keeps_all() {
    let weights = [0.4; 6];
    let kept = VariancePruner.select(&weights, 1.0, &mut rng()).unwrap();
    assert_eq!(kept, weights.to_vec());
}

// =========================================================================
// L1-norm
// =========================================================================

#[test]
fn test_l1_norm_fraction_of_mean_magnitude() {
    // TEST_ID: STR-040
    // l1 = 10, n = 4, mean magnitude = 2.5
    let weights = [1.0, -2.0, 3.0, -4.0];
    assert_eq!(L1NormPruner.select(&weights, 1.0, &mut rng()).unwrap(), vec![3.0, -4.0]);
    assert_eq!(L1NormPruner.select(&weights, 0.5, &mut rng()).unwrap(), vec![-2.0, 3.0, -4.0]);
}

// =========================================================================
// Gradient
// =========================================================================

#[test]
fn test_gradient_with_provided_gradients() {
    // TEST_ID: STR-050
    // importance = [0.5, 0.2, 3.0, 0.0]
    let weights = [1.0, 2.0, 3.0, 4.0];
    let mut gradients = ProvidedGradients::new(vec![0.5, 0.1, -1.0, 0.0]);
    let kept = GradientPruner.select_with(&weights, 0.4, &mut gradients).unwrap();
    assert_eq!(kept, vec![1.0, 3.0], "STR-050 FALSIFIED: |w * g| > threshold");
}

#[test]
fn test_gradient_length_mismatch_rejected() {
    let mut gradients = ProvidedGradients::new(vec![0.5]);
    let err = GradientPruner.select_with(&[1.0, 2.0], 0.1, &mut gradients).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_simulated_gradients_in_unit_range() {
    let mut rng = rng();
    let gradients = SimulatedGradients::new(&mut rng).gradients(1000).unwrap();
    assert_eq!(gradients.len(), 1000);
    assert!(gradients.iter().all(|g| (-1.0..=1.0).contains(g)));
}

#[test]
fn test_gradient_simulated_reproducible_with_seed() {
    let weights: Vec<f32> = (0..64).map(|i| (i as f32 - 32.0) / 32.0).collect();
    let a = GradientPruner.select(&weights, 0.2, &mut StdRng::seed_from_u64(3)).unwrap();
    let b = GradientPruner.select(&weights, 0.2, &mut StdRng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
    assert!(a.len() < weights.len());
}

// =========================================================================
// Entropy
// =========================================================================

#[test]
fn test_entropy_keeps_ties_at_cutoff() {
    // TEST_ID: STR-060
    // entropy ~= 0.629, target = floor(4 * 0.371) = 1, cutoff = 0.5, three weights tie.
    let weights = [0.5, 0.1, 0.5, 0.5];
    assert_eq!(EntropyPruner::target_size(&weights, 1.0), 1);
    let kept = EntropyPruner.select(&weights, 1.0, &mut rng()).unwrap();
    assert_eq!(kept, vec![0.5, 0.5, 0.5], "STR-060 FALSIFIED: ties at the cutoff are kept");
}

#[test]
fn test_entropy_zero_threshold_keeps_all() {
    let weights = [0.3, -0.7, 0.1];
    let kept = EntropyPruner.select(&weights, 0.0, &mut rng()).unwrap();
    assert_eq!(kept, weights.to_vec());
}

#[test]
fn test_entropy_large_threshold_empties_layer() {
    let weights = [0.3, -0.7, 0.1, 0.9];
    assert_eq!(EntropyPruner::target_size(&weights, 100.0), 0);
    assert_eq!(EntropyPruner::target_size(&weights, 0.0), 4);
    assert!(EntropyPruner.select(&weights, 100.0, &mut rng()).unwrap().is_empty());
}

#[test]
fn test_entropy_single_weight_survives() {
    let kept = EntropyPruner.select(&[0.25], 5.0, &mut rng()).unwrap();
    assert_eq!(kept, vec![0.25]);
}

#[test]
fn test_entropy_preserves_input_order() {
    let weights = [0.1, 0.9, -0.8, 0.2, 0.7];
    let kept = EntropyPruner.select(&weights, 0.5, &mut rng()).unwrap();
    let positions: Vec<usize> =
        kept.iter().map(|k| weights.iter().position(|w| w == k).unwrap()).collect();
    assert!(positions.windows(2).all(|p| p[0] < p[1]));
}

// =========================================================================
// Shared helpers
// =========================================================================

#[test]
fn test_alloc_buffer_reports_failure() {
    let err = alloc_buffer::<f32>(usize::MAX).unwrap_err();
    assert_eq!(err, PruneError::AllocationFailed { requested: usize::MAX });
}

#[test]
fn test_scratch_buffers_report_failure() {
    // Index and mask scratch types fail the same way as weight buffers.
    let half = usize::MAX / 2;
    assert!(matches!(alloc_buffer::<usize>(half), Err(PruneError::AllocationFailed { .. })));
    assert!(matches!(alloc_buffer::<bool>(usize::MAX), Err(PruneError::AllocationFailed { .. })));
    assert!(alloc_buffer::<usize>(16).unwrap().capacity() >= 16);
}

#[test]
fn test_retain_where_passes_indices() {
    let kept = retain_where(&[1.0, 2.0, 3.0, 4.0], |i, _| i % 2 == 1).unwrap();
    assert_eq!(kept, vec![2.0, 4.0]);
}

#[test]
fn test_strategy_names() {
    assert_eq!(MagnitudePruner.name(), "magnitude");
    assert_eq!(PercentagePruner.name(), "percentage");
    assert_eq!(RandomPruner.name(), "random");
    assert_eq!(VariancePruner.name(), "variance");
    assert_eq!(L1NormPruner.name(), "l1_norm");
    assert_eq!(GradientPruner.name(), "gradient");
    assert_eq!(EntropyPruner.name(), "entropy");
}
