//! Trace-file aggregation
//!
//! One sequential pass over a tab-delimited trace file: locate the
//! `duration` column from the header, parse each row's value, accumulate the
//! total. Row-level parse failures warn and continue; structural failures
//! (no header, no duration column, I/O errors) abort.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::duration::{parse_duration, TraceDuration};

/// Name of the column the aggregator consumes
const DURATION_COLUMN: &str = "duration";

/// Errors for trace-file aggregation
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("error reading trace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing header line in input file")]
    MissingHeader,

    #[error("duration column not found in input file")]
    MissingDurationColumn,
}

/// Aggregation result: the accumulated total plus row accounting
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceSummary {
    /// Sum of every successfully parsed duration value
    pub total: TraceDuration,
    /// Rows whose duration value contributed to the total
    pub rows_summed: u64,
    /// Rows skipped with a warning because their duration value was unparseable
    pub rows_skipped: u64,
}

/// Sum the `duration` column of the trace file at `path`.
///
/// The file handle is scoped to this call and closed on every exit path.
/// Rows with fewer fields than the duration column index are treated as
/// malformed and skipped silently; rows whose duration fails to parse are
/// skipped with a warning on stderr. Both kinds leave the total untouched.
pub fn sum_durations(path: &Path) -> Result<TraceSummary, SummaryError> {
    let file = File::open(path)?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(SummaryError::MissingHeader),
    };

    // first match wins if the column is duplicated
    let duration_idx = header
        .split('\t')
        .position(|col| col == DURATION_COLUMN)
        .ok_or(SummaryError::MissingDurationColumn)?;
    debug!("duration column at index {}", duration_idx);

    let mut summary = TraceSummary::default();
    for line in lines {
        let line = line?;
        let field = match line.split('\t').nth(duration_idx) {
            Some(field) => field,
            // short row: fewer fields than the duration column needs
            None => continue,
        };

        match parse_duration(field) {
            Ok(duration) => {
                summary.total = summary.total.saturating_add(duration);
                summary.rows_summed += 1;
            }
            Err(err) => {
                eprintln!("Warning: error parsing duration '{}': {}", field, err);
                summary.rows_skipped += 1;
            }
        }
    }

    debug!(
        "summed {} rows, skipped {}",
        summary.rows_summed, summary.rows_skipped
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_trace(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_sums_duration_column() {
        let file = write_trace("id\tduration\tstatus\na\t1h\tok\nb\t30m\tok\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total.as_nanos(), 5_400_000_000_000); // 90 minutes
        assert_eq!(summary.rows_summed, 2);
        assert_eq!(summary.rows_skipped, 0);
    }

    #[test]
    fn test_composite_values_in_rows() {
        let file = write_trace("duration\n1h 21m 27s\n42.9s\n500ms\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(
            summary.total.as_nanos(),
            4_887_000_000_000 + 42_900_000_000 + 500_000_000
        );
        assert_eq!(summary.rows_summed, 3);
    }

    #[test]
    fn test_missing_duration_column_is_fatal() {
        let file = write_trace("id\truntime\tstatus\na\t1h\tok\n");
        let err = sum_durations(file.path()).unwrap_err();
        assert!(matches!(err, SummaryError::MissingDurationColumn));
    }

    #[test]
    fn test_empty_file_is_missing_header() {
        let file = write_trace("");
        let err = sum_durations(file.path()).unwrap_err();
        assert!(matches!(err, SummaryError::MissingHeader));
    }

    #[test]
    fn test_header_only_file_sums_to_zero() {
        let file = write_trace("id\tduration\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total, TraceDuration::ZERO);
        assert_eq!(summary.rows_summed, 0);
    }

    #[test]
    fn test_short_rows_skipped_silently() {
        let file = write_trace("id\tduration\na\nb\t45m\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total.as_nanos(), 2_700_000_000_000);
        assert_eq!(summary.rows_summed, 1);
        // short rows are not counted as skipped; only warned rows are
        assert_eq!(summary.rows_skipped, 0);
    }

    #[test]
    fn test_unparseable_row_warns_and_continues() {
        let file = write_trace("id\tduration\na\tgarbage\nb\t45m\nc\t15m\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total.as_nanos(), 3_600_000_000_000);
        assert_eq!(summary.rows_summed, 2);
        assert_eq!(summary.rows_skipped, 1);
    }

    #[test]
    fn test_duplicate_duration_columns_first_wins() {
        let file = write_trace("duration\tduration\n1h\t2h\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total.as_nanos(), 3_600_000_000_000);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = sum_durations(Path::new("/no/such/trace.txt")).unwrap_err();
        assert!(matches!(err, SummaryError::Io(_)));
    }

    #[test]
    fn test_no_trailing_newline() {
        let file = write_trace("duration\n30m\n15m");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total.as_nanos(), 2_700_000_000_000);
    }

    #[test]
    fn test_duration_column_not_first() {
        let file = write_trace("task_id\tname\tstatus\tduration\tcpu\nx\ty\tok\t2m\t50%\n");
        let summary = sum_durations(file.path()).unwrap();
        assert_eq!(summary.total.as_nanos(), 120_000_000_000);
    }
}
