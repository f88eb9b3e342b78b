//! Ingestion of timing samples from text sources.
//!
//! Two sources are supported, matching how benchmark harnesses usually hand
//! off their raw runs:
//!
//! - **Newline-delimited streams**: one numeric sample per line, blank lines
//!   skipped. This is the shape a harness produces when it appends one
//!   timing per run to a stream or log.
//! - **Delimited files**: one row per run with a chosen column holding the
//!   timing value, e.g. space- or comma-separated output files.
//!
//! Both parsers validate that every token is a finite number, so the filter
//! core downstream can assume sanitized input.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Errors that can occur while loading timing samples.
#[derive(Debug)]
pub enum DataError {
    /// IO error reading the source.
    Io(std::io::Error),

    /// A token failed to parse as a finite number.
    InvalidValue {
        /// Line number where the invalid value was found (1-indexed).
        line: usize,
        /// The offending token.
        value: String,
    },

    /// A row had no token at the requested column.
    MissingColumn {
        /// Line number of the short row (1-indexed).
        line: usize,
        /// The zero-based column that was requested.
        column: usize,
    },

    /// The source contained no samples at all.
    Empty,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(e) => write!(f, "IO error: {}", e),
            DataError::InvalidValue { line, value } => {
                write!(f, "Invalid timing value at line {}: '{}'", line, value)
            }
            DataError::MissingColumn { line, column } => {
                write!(f, "Line {} has no column {}", line, column)
            }
            DataError::Empty => write!(f, "No samples found in input"),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e)
    }
}

/// Read newline-delimited samples from a reader.
///
/// Blank lines are skipped; every other line must parse as a finite number
/// (integer or float form).
///
/// # Errors
///
/// `DataError::InvalidValue` with the 1-indexed line number for a bad token,
/// `DataError::Empty` if no samples were found.
pub fn read_samples<R: BufRead>(reader: R) -> Result<Vec<f64>, DataError> {
    let mut samples = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        let token = line.trim();

        if token.is_empty() {
            continue;
        }

        samples.push(parse_sample(token, line_num + 1)?);
    }

    if samples.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(samples)
}

/// Load one numeric column from a delimited text file.
///
/// Rows are split on `delimiter`; the zero-based `column` must hold a finite
/// number in every non-blank row. `limit` caps the number of rows taken
/// (`None` reads the whole file) — useful when a harness appends beyond the
/// intended run count.
///
/// # Errors
///
/// `DataError::MissingColumn` for a short row, `DataError::InvalidValue`
/// for a bad token, `DataError::Empty` if nothing was loaded.
pub fn load_delimited_column(
    path: &Path,
    delimiter: char,
    column: usize,
    limit: Option<usize>,
) -> Result<Vec<f64>, DataError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut samples = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        if let Some(cap) = limit {
            if samples.len() >= cap {
                break;
            }
        }

        let line = line_result?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let token = line
            .split(delimiter)
            .nth(column)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(DataError::MissingColumn {
                line: line_num + 1,
                column,
            })?;

        samples.push(parse_sample(token, line_num + 1)?);
    }

    if samples.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(samples)
}

/// Parse one token as a finite sample value.
fn parse_sample(token: &str, line: usize) -> Result<f64, DataError> {
    let value: f64 = token.parse().map_err(|_| DataError::InvalidValue {
        line,
        value: token.to_string(),
    })?;

    // "nan" and "inf" parse as f64 but are meaningless as timings.
    if !value.is_finite() {
        return Err(DataError::InvalidValue {
            line,
            value: token.to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_samples_skips_blank_lines() {
        let input = b"100\n\n200\n   \n300\n" as &[u8];
        let samples = read_samples(input).unwrap();
        assert_eq!(samples, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_read_samples_accepts_floats() {
        let input = b"1.5\n2\n3.25\n" as &[u8];
        let samples = read_samples(input).unwrap();
        assert_eq!(samples, vec![1.5, 2.0, 3.25]);
    }

    #[test]
    fn test_read_samples_reports_bad_line() {
        let input = b"1\n2\noops\n4\n" as &[u8];
        let err = read_samples(input).unwrap_err();

        match err {
            DataError::InvalidValue { line, value } => {
                assert_eq!(line, 3);
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_read_samples_rejects_non_finite() {
        let input = b"1\ninf\n" as &[u8];
        let err = read_samples(input).unwrap_err();
        assert!(matches!(err, DataError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn test_read_samples_empty_stream() {
        let input = b"\n\n" as &[u8];
        let err = read_samples(input).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }

    #[test]
    fn test_load_delimited_column() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "xs 101").unwrap();
        writeln!(file, "xs 102").unwrap();
        writeln!(file, "xs 103").unwrap();

        let samples = load_delimited_column(file.path(), ' ', 1, None).unwrap();
        assert_eq!(samples, vec![101.0, 102.0, 103.0]);
    }

    #[test]
    fn test_load_delimited_column_respects_limit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for i in 0..10 {
            writeln!(file, "{}", i).unwrap();
        }

        let samples = load_delimited_column(file.path(), ' ', 0, Some(4)).unwrap();
        assert_eq!(samples, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_load_delimited_column_short_row() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "a,1").unwrap();
        writeln!(file, "b").unwrap();

        let err = load_delimited_column(file.path(), ',', 1, None).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn { line: 2, column: 1 }));
    }

    #[test]
    fn test_load_delimited_column_missing_file() {
        let err =
            load_delimited_column(Path::new("/no/such/file"), ' ', 0, None).unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
    }
}
