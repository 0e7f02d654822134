//! Water-level logger CSV reader.

use std::path::Path;

use checkdam_resample::StageReading;
use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::error::IoError;
use crate::validate::{ValidationCollector, csv_error, parse_number, parse_timestamp, read_text};

const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

// Positional layout after the header: scan no, date, time, raw value, calibrated value.
const DATE_COL: usize = 1;
const TIME_COL: usize = 2;
const RAW_COL: usize = 3;

/// Layout of a water-level logger export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLoggerConfig {
    skip_rows: usize,
}

impl Default for StageLoggerConfig {
    fn default() -> Self {
        Self { skip_rows: 9 }
    }
}

impl StageLoggerConfig {
    /// Set the number of preamble lines before the header row.
    pub fn with_skip_rows(mut self, n: usize) -> Self {
        self.skip_rows = n;
        self
    }

    /// Returns the number of preamble lines.
    pub fn skip_rows(&self) -> usize {
        self.skip_rows
    }
}

/// Read one logger block, returning the raw sensor count of every scan.
///
/// The logger writes midnight as `24:00:00`; it is read as `23:59:59` of the
/// same date so the scan stays on the day it closes.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::Validation`] | one or more rows have bad timestamps or counts |
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_stage_logger(
    path: &Path,
    config: &StageLoggerConfig,
) -> Result<Vec<StageReading>, IoError> {
    let text = read_text(path)?;
    let body = text
        .lines()
        .skip(config.skip_rows)
        .collect::<Vec<_>>()
        .join("\n");
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut collector = ValidationCollector::new();
    let mut readings = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = config.skip_rows + i + 2;
        if record.len() <= RAW_COL {
            collector.push(format!(
                "line {line}: expected at least {} fields, got {}",
                RAW_COL + 1,
                record.len()
            ));
            continue;
        }
        let time = match record.get(TIME_COL).map(str::trim) {
            Some("24:00:00") => "23:59:59",
            Some(t) => t,
            None => "",
        };
        let timestamp = parse_timestamp(
            record.get(DATE_COL).unwrap_or(""),
            time,
            DATE_TIME_FORMAT,
            line,
            &mut collector,
        );
        let value = parse_number(&record, RAW_COL, "raw value", line, &mut collector);
        if let (Some(timestamp), Some(value)) = (timestamp, value) {
            readings.push(StageReading { timestamp, value });
        }
    }
    collector.finish()?;

    debug!(n_readings = readings.len(), "stage logger block read");
    Ok(readings)
}

/// Read several logger blocks and concatenate them in timestamp order.
///
/// The sort is stable, so scans sharing a timestamp keep block order.
///
/// # Errors
///
/// Propagates the first error from [`read_stage_logger`].
pub fn read_stage_blocks<P: AsRef<Path>>(
    paths: &[P],
    config: &StageLoggerConfig,
) -> Result<Vec<StageReading>, IoError> {
    let mut readings = Vec::new();
    for path in paths {
        readings.extend(read_stage_logger(path.as_ref(), config)?);
    }
    readings.sort_by_key(|r| r.timestamp);
    info!(
        n_blocks = paths.len(),
        n_readings = readings.len(),
        "stage blocks concatenated"
    );
    Ok(readings)
}
