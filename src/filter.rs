//! Confidence-interval outlier filtering.
//!
//! The filter computes a two-tailed Student's t confidence interval for the
//! mean of a timing sample set, discards samples outside the interval, and
//! reports the mean of the retained samples. An interval that excludes every
//! sample falls back to the unfiltered mean — that fallback is deliberate,
//! documented behavior, not an error path.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::statistics::{two_sided_critical_value, SampleSummary};

/// Errors produced by the confidence filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The sample sequence was empty; every statistic is undefined.
    EmptyInput,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::EmptyInput => {
                write!(f, "cannot filter an empty sample sequence")
            }
        }
    }
}

impl std::error::Error for FilterError {}

/// Inclusive interval [lower, upper] around the sample mean.
///
/// Derived per filter invocation from the sample summary and the critical
/// t-value; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl ConfidenceInterval {
    /// Build the interval `mean ± critical_value · std_error`.
    pub fn around(summary: &SampleSummary, critical_value: f64) -> Self {
        let half_width = critical_value * summary.std_error();
        Self {
            lower: summary.mean - half_width,
            upper: summary.mean + half_width,
        }
    }

    /// Whether `value` lies within the interval. Both bounds are inclusive,
    /// so a zero-width interval still contains its own midpoint.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Interval width.
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Outcome of a filter invocation.
///
/// Carries the filtered mean together with everything needed to explain it:
/// the interval used, how many samples survived, and whether the fallback
/// to the unfiltered mean was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterReport {
    /// The filtered mean — or the unfiltered mean when `fell_back` is set.
    pub mean: f64,
    /// Mean of the full input, before filtering.
    pub unfiltered_mean: f64,
    /// The confidence interval samples were tested against.
    pub interval: ConfidenceInterval,
    /// Number of samples inside the interval.
    pub retained: usize,
    /// Number of samples discarded as outliers.
    pub discarded: usize,
    /// True when the interval excluded every sample and the unfiltered
    /// mean was reported instead.
    pub fell_back: bool,
    /// Summary statistics of the full input.
    pub summary: SampleSummary,
}

/// Confidence-interval outlier filter for timing samples.
///
/// Use the builder pattern to override the confidence level, then run
/// [`filtered_mean`](Self::filtered_mean) or [`analyze`](Self::analyze)
/// on a sample slice.
///
/// # Example
///
/// ```
/// use timing_sieve::ConfidenceFilter;
///
/// let samples = [10.0, 10.0, 10.0, 10.0, 1000.0];
/// let report = ConfidenceFilter::new().analyze(&samples).unwrap();
///
/// assert_eq!(report.discarded, 1);
/// assert!((report.mean - 10.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceFilter {
    confidence_level: f64,
}

impl Default for ConfidenceFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceFilter {
    /// Confidence level used by [`new`](Self::new): a 95% two-tailed interval.
    pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

    /// Create a filter with the default 95% confidence level.
    pub fn new() -> Self {
        Self {
            confidence_level: Self::DEFAULT_CONFIDENCE_LEVEL,
        }
    }

    /// Set the two-tailed confidence level.
    ///
    /// # Panics
    ///
    /// Panics unless `level` is in the open interval (0, 1).
    pub fn confidence_level(mut self, level: f64) -> Self {
        assert!(
            level > 0.0 && level < 1.0,
            "confidence level must be in (0, 1), got {}",
            level
        );
        self.confidence_level = level;
        self
    }

    /// The configured confidence level.
    pub fn level(&self) -> f64 {
        self.confidence_level
    }

    /// Filtered mean of `samples`.
    ///
    /// Convenience wrapper around [`analyze`](Self::analyze) that discards
    /// the report detail.
    pub fn filtered_mean(&self, samples: &[f64]) -> Result<f64, FilterError> {
        self.analyze(samples).map(|report| report.mean)
    }

    /// Run the filter and return the full [`FilterReport`].
    ///
    /// The interval is `mean ± t · s/√n`, with `t` the two-tailed critical
    /// value of the Student's t distribution at `n − 1` degrees of freedom.
    /// Samples on either bound are retained. The result is always finite
    /// for finite, non-empty input:
    ///
    /// - A single sample has standard error 0; the interval collapses to
    ///   the mean and the sample is trivially retained.
    /// - An interval that excludes every sample (strongly bimodal data can
    ///   do this) reports the unfiltered mean with `fell_back` set.
    ///
    /// Non-finite samples are the caller's responsibility; the ingestion
    /// layer in [`crate::data`] rejects them at parse time.
    ///
    /// Note that filtering is not idempotent across sub-selection: running
    /// the retained subset through a fresh interval computed from that
    /// subset is not guaranteed to reproduce the first-pass result.
    ///
    /// # Errors
    ///
    /// [`FilterError::EmptyInput`] if `samples` is empty.
    pub fn analyze(&self, samples: &[f64]) -> Result<FilterReport, FilterError> {
        let summary =
            SampleSummary::from_samples(samples).ok_or(FilterError::EmptyInput)?;

        // df = 0 has no t distribution; the contract collapses the interval
        // onto the mean and keeps the lone sample.
        if summary.count == 1 {
            return Ok(FilterReport {
                mean: summary.mean,
                unfiltered_mean: summary.mean,
                interval: ConfidenceInterval {
                    lower: summary.mean,
                    upper: summary.mean,
                },
                retained: 1,
                discarded: 0,
                fell_back: false,
                summary,
            });
        }

        let df = (summary.count - 1) as f64;
        let critical = two_sided_critical_value(self.confidence_level, df);
        let interval = ConfidenceInterval::around(&summary, critical);

        let report = match mean_within(samples, &interval) {
            Some((mean, retained)) => FilterReport {
                mean,
                unfiltered_mean: summary.mean,
                interval,
                retained,
                discarded: samples.len() - retained,
                fell_back: false,
                summary,
            },
            None => FilterReport {
                mean: summary.mean,
                unfiltered_mean: summary.mean,
                interval,
                retained: 0,
                discarded: samples.len(),
                fell_back: true,
                summary,
            },
        };

        Ok(report)
    }
}

/// Mean of the samples inside `interval`, with the retained count.
///
/// Returns `None` when the interval excludes every sample; the filter maps
/// that case to its unfiltered-mean fallback. Exposed separately so the
/// fallback can be exercised with arbitrary bounds.
pub fn mean_within(samples: &[f64], interval: &ConfidenceInterval) -> Option<(f64, usize)> {
    let mut sum = 0.0;
    let mut kept = 0usize;

    for &x in samples {
        if interval.contains(x) {
            sum += x;
            kept += 1;
        }
    }

    if kept == 0 {
        None
    } else {
        Some((sum / kept as f64, kept))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_bounds_are_inclusive() {
        let interval = ConfidenceInterval {
            lower: 1.0,
            upper: 3.0,
        };

        assert!(interval.contains(1.0));
        assert!(interval.contains(3.0));
        assert!(interval.contains(2.0));
        assert!(!interval.contains(0.999_999));
        assert!(!interval.contains(3.000_001));
    }

    #[test]
    fn test_zero_width_interval_contains_midpoint() {
        let interval = ConfidenceInterval {
            lower: 5.0,
            upper: 5.0,
        };
        assert!(interval.contains(5.0));
        assert_eq!(interval.width(), 0.0);
    }

    #[test]
    fn test_mean_within_basic() {
        let interval = ConfidenceInterval {
            lower: 0.0,
            upper: 10.0,
        };
        let (mean, kept) = mean_within(&[1.0, 5.0, 9.0, 50.0], &interval).unwrap();

        assert_eq!(kept, 3);
        assert!((mean - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_mean_within_empty_retention() {
        // Bounds narrower than every sample: the caller-facing fallback case.
        let interval = ConfidenceInterval {
            lower: 0.4,
            upper: 0.6,
        };
        assert!(mean_within(&[1.0, 2.0, 3.0], &interval).is_none());
    }

    #[test]
    fn test_single_sample_passes_through() {
        let report = ConfidenceFilter::new().analyze(&[42.5]).unwrap();

        assert_eq!(report.mean, 42.5);
        assert_eq!(report.retained, 1);
        assert_eq!(report.discarded, 0);
        assert!(!report.fell_back);
        assert_eq!(report.interval.width(), 0.0);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = ConfidenceFilter::new().filtered_mean(&[]).unwrap_err();
        assert_eq!(err, FilterError::EmptyInput);
    }

    #[test]
    fn test_custom_confidence_level_narrows_interval() {
        let samples: Vec<f64> = (0..50).map(|i| (i % 7) as f64).collect();

        let wide = ConfidenceFilter::new().analyze(&samples).unwrap();
        let narrow = ConfidenceFilter::new()
            .confidence_level(0.5)
            .analyze(&samples)
            .unwrap();

        assert!(narrow.interval.width() < wide.interval.width());
    }

    #[test]
    #[should_panic]
    fn test_confidence_level_rejects_one() {
        ConfidenceFilter::new().confidence_level(1.0);
    }

    #[test]
    fn test_report_counts_are_consistent() {
        let samples = [10.0, 10.0, 10.0, 10.0, 1000.0];
        let report = ConfidenceFilter::new().analyze(&samples).unwrap();

        assert_eq!(report.retained + report.discarded, samples.len());
        assert_eq!(report.summary.count, samples.len());
    }
}
