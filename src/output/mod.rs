//! Report formatting for filter results.

use colored::Colorize;

use crate::filter::FilterReport;

/// Format a mean to two decimal places, the contract consumed by
/// downstream tooling.
pub fn format_mean(mean: f64) -> String {
    format!("{:.2}", mean)
}

/// Format a [`FilterReport`] for human-readable terminal output.
///
/// Uses ANSI colors for the headline value and a warning when the filter
/// fell back to the unfiltered mean.
pub fn format_report(report: &FilterReport) -> String {
    let mut output = String::new();

    let headline = format!("filtered mean: {}", format_mean(report.mean));
    output.push_str(&format!("{}\n", headline.green().bold()));

    if report.fell_back {
        let warning = "interval excluded every sample; reporting the unfiltered mean";
        output.push_str(&format!("{}\n", warning.yellow()));
    }

    output.push_str(&format!(
        "samples:         {} ({} retained, {} discarded)\n",
        report.summary.count, report.retained, report.discarded
    ));
    output.push_str(&format!(
        "interval:        [{:.2}, {:.2}]\n",
        report.interval.lower, report.interval.upper
    ));
    output.push_str(&format!(
        "unfiltered mean: {}\n",
        format_mean(report.unfiltered_mean)
    ));
    output.push_str(&format!("std dev:         {:.2}\n", report.summary.std_dev()));

    output
}
