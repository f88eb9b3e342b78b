//! Batch summary statistics over a sample slice.

use serde::{Deserialize, Serialize};

/// Summary statistics of a timing sample set.
///
/// Computed in one batch pass over the input. Variance uses Bessel's
/// correction (n−1 denominator); a single-sample set has variance 0 by
/// definition rather than leaving it to floating-point accident.
///
/// # Example
///
/// ```
/// use timing_sieve::SampleSummary;
///
/// let summary = SampleSummary::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert!((summary.mean - 3.0).abs() < 1e-10);
/// assert!((summary.variance - 2.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSummary {
    /// Number of samples.
    pub count: usize,
    /// Sample mean.
    pub mean: f64,
    /// Sample variance (n−1 denominator).
    pub variance: f64,
}

impl SampleSummary {
    /// Summarize a sample slice.
    ///
    /// Returns `None` for an empty slice; every statistic is undefined there.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;

        let variance = if samples.len() < 2 {
            0.0
        } else {
            samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0)
        };

        Some(Self {
            count: samples.len(),
            mean,
            variance,
        })
    }

    /// Sample standard deviation.
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// Standard error of the mean: s / sqrt(n).
    pub fn std_error(&self) -> f64 {
        self.std_dev() / (self.count as f64).sqrt()
    }
}
