//! CLI for confidence-filtering benchmark timing samples.
//!
//! # Usage
//!
//! ```bash
//! # Filter newline-delimited samples from stdin, print the mean
//! ./xs_benchmark | timing-sieve
//!
//! # Load the second space-delimited column of a results file
//! timing-sieve runs.txt --column 1
//!
//! # First 100 rows only, with a human-readable report
//! timing-sieve runs.txt --limit 100 --report
//!
//! # Machine-readable output
//! timing-sieve runs.txt --json
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use timing_sieve::data::{load_delimited_column, read_samples};
use timing_sieve::output::{format_mean, format_report};
use timing_sieve::ConfidenceFilter;

/// Report the outlier-filtered mean of repeated timing measurements
#[derive(Parser, Debug)]
#[command(name = "timing-sieve")]
#[command(about = "Filter timing samples through a 95% confidence interval")]
#[command(version)]
struct Args {
    /// Delimited input file; reads newline-delimited samples from stdin when omitted
    input: Option<PathBuf>,

    /// Column delimiter for file input
    #[arg(short, long, default_value_t = ' ')]
    delimiter: char,

    /// Zero-based column holding the timing value
    #[arg(short, long, default_value_t = 0)]
    column: usize,

    /// Keep only the first N rows of file input
    #[arg(short, long)]
    limit: Option<usize>,

    /// Print a human-readable report instead of the bare mean
    #[arg(long)]
    report: bool,

    /// Print the full report as JSON
    #[arg(long, conflicts_with = "report")]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("timing-sieve: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let samples = match &args.input {
        Some(path) => load_delimited_column(path, args.delimiter, args.column, args.limit)?,
        None => read_samples(io::stdin().lock())?,
    };

    let report = ConfidenceFilter::new().analyze(&samples)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if args.report {
        print!("{}", format_report(&report));
    } else {
        println!("{}", format_mean(report.mean));
    }

    Ok(())
}
