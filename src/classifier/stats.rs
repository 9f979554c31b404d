//! Summary statistics and display formatting

/// Mean, max and population standard deviation of a curvature sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvatureStats {
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub std_dev: f64,
}

impl CurvatureStats {
    /// Summarize `values`, or `None` for an empty slice.
    ///
    /// The standard deviation divides by N, not N - 1. Sums run left to
    /// right so results are reproducible bit for bit.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.iter().fold(0.0, |acc, v| acc + v) / n;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let variance = values
            .iter()
            .fold(0.0, |acc, v| acc + (v - mean) * (v - mean))
            / n;

        Some(Self {
            count: values.len(),
            mean,
            max,
            std_dev: variance.sqrt(),
        })
    }
}

/// Format a statistic with four decimals, rounding ties away from zero.
///
/// `{:.4}` rounds exact ties to even. The only f64 values that sit exactly
/// halfway between two 4-digit decimals are odd multiples of 1/32, so those
/// are rounded in integer arithmetic instead.
pub fn format_stat(value: f64) -> String {
    let scaled = value * 32.0;
    if scaled.is_finite() && scaled.fract() == 0.0 && scaled.rem_euclid(2.0) == 1.0 {
        // value = k/32 with k odd, so value * 10^4 = k * 625 / 2 ends in exactly .5
        let k = scaled.abs() as u128;
        let units = (k * 625 + 1) / 2;
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{}{}.{:04}", sign, units / 10_000, units % 10_000);
    }
    format!("{:.4}", value)
}
