//! Summary statistics over a weight buffer.
//!
//! Accumulation happens in `f64`; results are reported as `f32`.

/// Arithmetic mean. Returns 0.0 for an empty buffer.
pub fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|&v| f64::from(v)).sum();
    (sum / values.len() as f64) as f32
}

/// Population standard deviation (divides by n, not n - 1).
pub fn std_dev(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().map(|&v| f64::from(v)).sum::<f64>() / n;
    let squared_diff: f64 = values
        .iter()
        .map(|&v| {
            let diff = f64::from(v) - mean;
            diff * diff
        })
        .sum();
    (squared_diff / n).sqrt() as f32
}

/// Sum of absolute values.
pub fn l1_norm(values: &[f32]) -> f32 {
    values.iter().map(|&v| f64::from(v.abs())).sum::<f64>() as f32
}

/// Normalized pseudo-entropy of the weight magnitudes.
///
/// Each weight contributes `p = |w| / n`. The `p` values are not rescaled to
/// sum to one, so for weights larger than 1 in magnitude the result can leave
/// `[0, 1]`. The sum of `-p * log2(p)` over `p > 0` is divided by `log2(n)`.
///
/// Buffers with fewer than two weights have `log2(n) == 0` and report 0.0.
pub fn entropy(values: &[f32]) -> f32 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let n = n as f64;
    let raw: f64 = values
        .iter()
        .map(|&w| f64::from(w.abs()) / n)
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.log2())
        .sum();
    (raw / n.log2()) as f32
}
