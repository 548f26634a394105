//! Distribution statistics for numeric columns.
//!
//! Closed-form moment and quantile estimators only: mean, median, sample
//! standard deviation, linearly interpolated quartiles, adjusted
//! Fisher-Pearson skewness, and IQR-fence outlier counting.

// Statistical computation requires usize->f64 casts
#![allow(clippy::cast_precision_loss)]

/// Multiplier applied to the IQR when fencing outliers.
pub const IQR_FENCE_MULTIPLIER: f64 = 1.5;

/// Absolute skewness beyond which a distribution counts as distorted.
pub const SKEWNESS_LIMIT: f64 = 0.5;

/// Summary statistics for one numeric value sequence.
///
/// `std_dev` needs at least two values and `skewness` at least three values
/// plus nonzero variance; below that they are `None` and the corresponding
/// flags stay false.
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionStats {
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (50th percentile, linear interpolation).
    pub median: f64,
    /// Sample standard deviation (ddof = 1).
    pub std_dev: Option<f64>,
    /// First quartile (25th percentile, linear interpolation).
    pub q1: f64,
    /// Third quartile (75th percentile, linear interpolation).
    pub q3: f64,
    /// Adjusted Fisher-Pearson skewness coefficient.
    pub skewness: Option<f64>,
    /// Values strictly outside the IQR fence.
    pub outlier_count: usize,
}

impl DistributionStats {
    /// Computes statistics over non-missing values.
    ///
    /// Returns `None` when `values` is empty; the caller decides what an
    /// all-missing column means.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let mean = mean(values);
        let median = quantile(&sorted, 0.5);
        let q1 = quantile(&sorted, 0.25);
        let q3 = quantile(&sorted, 0.75);
        let std_dev = sample_std(values, mean);
        let skewness = skewness(values, mean);

        let iqr = q3 - q1;
        let lower = q1 - IQR_FENCE_MULTIPLIER * iqr;
        let upper = q3 + IQR_FENCE_MULTIPLIER * iqr;
        let outlier_count = values.iter().filter(|&&v| v < lower || v > upper).count();

        Some(Self {
            mean,
            median,
            std_dev,
            q1,
            q3,
            skewness,
            outlier_count,
        })
    }

    /// Interquartile range.
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// Lower bound below which a value is an outlier.
    pub fn outlier_lower_bound(&self) -> f64 {
        self.q1 - IQR_FENCE_MULTIPLIER * self.iqr()
    }

    /// Upper bound above which a value is an outlier.
    pub fn outlier_upper_bound(&self) -> f64 {
        self.q3 + IQR_FENCE_MULTIPLIER * self.iqr()
    }

    /// True when the skew magnitude exceeds [`SKEWNESS_LIMIT`].
    pub fn is_distorted(&self) -> bool {
        self.skewness
            .is_some_and(|s| s.abs() > SKEWNESS_LIMIT)
    }

    /// True when dispersion exceeds the interquartile spread.
    ///
    /// A zero IQR is stable by definition, whatever the standard deviation.
    pub fn is_unstable(&self) -> bool {
        let iqr = self.iqr();
        iqr > 0.0 && self.std_dev.is_some_and(|s| s > iqr)
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation with ddof = 1; undefined below two values.
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 2 {
        return None;
    }

    let sum_sq: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((sum_sq / (n - 1) as f64).sqrt())
}

/// Quantile by linear interpolation over a sorted slice.
///
/// The rank is `(n - 1) * q`; fractional ranks interpolate between the two
/// neighboring order statistics.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = (n - 1) as f64 * q;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let fraction = rank - lo as f64;

    sorted[lo] + (sorted[hi] - sorted[lo]) * fraction
}

/// Adjusted Fisher-Pearson skewness: `sqrt(n(n-1)) / (n-2) * m3 / m2^1.5`
/// with biased central moments. Undefined below three values or at zero
/// variance.
fn skewness(values: &[f64], mean: f64) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }

    let n_f = n as f64;
    let m2: f64 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n_f;
    let m3: f64 = values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / n_f;

    if m2 == 0.0 {
        return None;
    }

    let g1 = m3 / m2.powf(1.5);
    Some(g1 * (n_f * (n_f - 1.0)).sqrt() / (n_f - 2.0))
}
