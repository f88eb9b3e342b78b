//! Statistical primitives for the confidence filter.
//!
//! This module provides the two ingredients the filter needs:
//! - Batch sample summaries (mean, Bessel-corrected variance, standard error)
//! - Two-tailed critical values of the Student's t distribution

mod student_t;
mod summary;

pub use student_t::{student_t_cdf, student_t_quantile, two_sided_critical_value};
pub use summary::SampleSummary;
