//! Pearson correlation, plain and over shifted windows of one buffer.

use std::collections::TryReserveError;

/// Pearson correlation from raw sums over `n` samples.
///
/// Returns `None` when either side has zero variance or the result is not
/// finite.
fn pearson_from_sums(n: f64, sum_x: f64, sum_y: f64, sum_xy: f64, sum_x2: f64, sum_y2: f64) -> Option<f32> {
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if !(denominator.is_finite() && denominator > 0.0) {
        return None;
    }
    let r = numerator / denominator;
    r.is_finite().then_some(r as f32)
}

/// Pearson correlation between `x` and `y`.
///
/// Uses the first `min(x.len(), y.len())` samples. Degenerate inputs (empty,
/// constant) give `None`.
pub fn pearson_correlation(x: &[f32], y: &[f32]) -> Option<f32> {
    let n = x.len().min(y.len());
    if n == 0 {
        return None;
    }
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&a, &b) in x.iter().zip(y) {
        let (a, b) = (f64::from(a), f64::from(b));
        sum_x += a;
        sum_y += b;
        sum_xy += a * b;
        sum_x2 += a * a;
        sum_y2 += b * b;
    }
    pearson_from_sums(n as f64, sum_x, sum_y, sum_xy, sum_x2, sum_y2)
}

/// Correlation between shifted windows of a single buffer.
///
/// For a buffer `w` of length `n`, the window at offset `i` is the length-`n`
/// sequence `w[i], w[i + 1], ...` where every position past the end of the
/// buffer reads as zero. Suffix sums are precomputed so each pair only walks
/// the overlapping region for the cross term.
#[derive(Debug, Clone)]
pub struct SuffixWindows<'a> {
    values: &'a [f32],
    sum: Vec<f64>,
    sum_sq: Vec<f64>,
}

impl<'a> SuffixWindows<'a> {
    /// Precompute suffix sums for `values`.
    ///
    /// Fails instead of aborting when the two `n + 1` sum tables cannot be
    /// allocated.
    pub fn new(values: &'a [f32]) -> Result<Self, TryReserveError> {
        let n = values.len();
        let mut sum = zeroed(n + 1)?;
        let mut sum_sq = zeroed(n + 1)?;
        for i in (0..n).rev() {
            let v = f64::from(values[i]);
            sum[i] = sum[i + 1] + v;
            sum_sq[i] = sum_sq[i + 1] + v * v;
        }
        Ok(Self { values, sum, sum_sq })
    }

    /// Window length, equal to the buffer length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the underlying buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Pearson correlation between the windows at offsets `i` and `j`.
    ///
    /// Returns `None` for out-of-range offsets and for degenerate windows.
    pub fn correlation(&self, i: usize, j: usize) -> Option<f32> {
        let n = self.values.len();
        if i >= n || j >= n {
            return None;
        }
        let sum_xy: f64 = self.values[i..]
            .iter()
            .zip(&self.values[j..])
            .map(|(&a, &b)| f64::from(a) * f64::from(b))
            .sum();
        pearson_from_sums(
            n as f64,
            self.sum[i],
            self.sum[j],
            sum_xy,
            self.sum_sq[i],
            self.sum_sq[j],
        )
    }
}

fn zeroed(len: usize) -> Result<Vec<f64>, TryReserveError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0.0);
    Ok(buffer)
}
