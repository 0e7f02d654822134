//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering every row-level problem in
//! a file into a single [`IoError::Validation`], plus the shared helpers the
//! readers use to open files and look up columns.

use std::path::Path;

use chrono::NaiveDateTime;

use crate::error::IoError;

/// Maximum number of messages kept verbatim in the error details.
const MAX_DETAILS: usize = 20;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Returns `true` when no errors have been recorded.
    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins the first messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        let count = self.errors.len();
        let mut details = self.errors[..count.min(MAX_DETAILS)].join("; ");
        if count > MAX_DETAILS {
            details.push_str(&format!("; ... and {} more", count - MAX_DETAILS));
        }
        Err(IoError::Validation { count, details })
    }
}

/// Reads a whole text file, mapping a missing file to
/// [`IoError::FileNotFound`].
pub(crate) fn read_text(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Maps a `csv` error onto [`IoError::Csv`] for `path`.
pub(crate) fn csv_error(path: &Path, e: csv::Error) -> IoError {
    IoError::Csv {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}

/// Position of `name` in `headers`, compared after trimming.
pub(crate) fn column_index(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, IoError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| IoError::MissingColumn {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
}

/// Parses a numeric cell, recording a message on failure.
pub(crate) fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    column: &str,
    line: usize,
    collector: &mut ValidationCollector,
) -> Option<f64> {
    let raw = record.get(index).unwrap_or("").trim();
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            collector.push(format!("line {line}: {column} '{raw}' is not a finite number"));
            None
        }
    }
}

/// Parses a timestamp from separate date and time cells.
pub(crate) fn parse_timestamp(
    date: &str,
    time: &str,
    format: &str,
    line: usize,
    collector: &mut ValidationCollector,
) -> Option<NaiveDateTime> {
    let joined = format!("{} {}", date.trim(), time.trim());
    match NaiveDateTime::parse_from_str(&joined, format) {
        Ok(ts) => Some(ts),
        Err(e) => {
            collector.push(format!("line {line}: timestamp '{joined}': {e}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_empty_is_ok() {
        let c = ValidationCollector::new();
        assert!(c.is_empty());
        assert_eq!(c.len(), 0);
        assert!(c.finish().is_ok());
    }

    #[test]
    fn collector_joins_messages() {
        let mut c = ValidationCollector::new();
        c.push("first");
        c.push("second");
        assert_eq!(c.len(), 2);
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 2);
                assert_eq!(details, "first; second");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn collector_truncates_long_details() {
        let mut c = ValidationCollector::new();
        for i in 0..25 {
            c.push(format!("e{i}"));
        }
        match c.finish().unwrap_err() {
            IoError::Validation { count, details } => {
                assert_eq!(count, 25);
                assert!(details.ends_with("; ... and 5 more"));
                assert!(!details.contains("e20"));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn parse_number_rejects_text_and_nan() {
        let record = csv::StringRecord::from(vec!["1.5", "abc", "NaN"]);
        let mut c = ValidationCollector::new();
        assert_eq!(parse_number(&record, 0, "a", 2, &mut c), Some(1.5));
        assert_eq!(parse_number(&record, 1, "b", 2, &mut c), None);
        assert_eq!(parse_number(&record, 2, "c", 2, &mut c), None);
        assert_eq!(c.len(), 2);
    }

    #[test]
    fn parse_timestamp_day_first() {
        let mut c = ValidationCollector::new();
        let ts = parse_timestamp("01/05/14", "10:30:00", "%d/%m/%y %H:%M:%S", 2, &mut c).unwrap();
        assert_eq!(ts.to_string(), "2014-05-01 10:30:00");
        assert!(c.is_empty());
    }

    #[test]
    fn column_index_trims_headers() {
        let headers = csv::StringRecord::from(vec!["Date", " Time "]);
        assert_eq!(column_index(&headers, "Time", Path::new("x")).unwrap(), 1);
        assert!(column_index(&headers, "Rain", Path::new("x")).is_err());
    }
}
