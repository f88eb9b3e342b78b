//! # timing-sieve
//!
//! Confidence-interval outlier filtering for benchmark timing measurements.
//!
//! Repeated timing runs of the same workload are noisy: scheduler preemption,
//! cache state, and frequency scaling produce occasional samples far from the
//! bulk of the distribution. This crate post-processes such a sample set by
//! computing a two-tailed Student's t confidence interval around the sample
//! mean, discarding samples outside that interval, and reporting the mean of
//! what remains.
//!
//! If the interval excludes every sample (possible for strongly bimodal
//! data), the unfiltered mean is returned instead of an error — see
//! [`ConfidenceFilter::analyze`] for the exact contract.
//!
//! ## Quick Start
//!
//! ```
//! use timing_sieve::ConfidenceFilter;
//!
//! // Four plausible timings and one scheduler hiccup.
//! let samples = [10.0, 11.0, 9.0, 10.0, 1000.0];
//!
//! let mean = ConfidenceFilter::new().filtered_mean(&samples).unwrap();
//! assert!((mean - 10.0).abs() < 1e-9);
//! ```
//!
//! The `timing-sieve` binary wraps the same filter for shell pipelines:
//! it reads newline-delimited samples from stdin (or a column of a
//! delimited file) and prints the filtered mean.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core module
mod filter;

// Functional modules
pub mod data;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use filter::{
    mean_within, ConfidenceFilter, ConfidenceInterval, FilterError, FilterReport,
};
pub use statistics::SampleSummary;
