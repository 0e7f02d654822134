//! Calibration pair table reader.

use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::error::IoError;
use crate::validate::{ValidationCollector, column_index, csv_error, parse_number, read_text};

/// Read two named numeric columns from a CSV with a header row.
///
/// Returns `(x, y)` in file order. Other columns (such as a serial number)
/// are ignored.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`IoError::FileNotFound`] | `path` does not exist |
/// | [`IoError::MissingColumn`] | `x_col` or `y_col` is absent |
/// | [`IoError::Validation`] | one or more cells are not finite numbers |
#[tracing::instrument(skip_all, fields(path = %path.display(), x_col = %x_col, y_col = %y_col))]
pub fn read_pairs_csv(
    path: &Path,
    x_col: &str,
    y_col: &str,
) -> Result<(Vec<f64>, Vec<f64>), IoError> {
    let text = read_text(path)?;
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());
    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let x_idx = column_index(&headers, x_col, path)?;
    let y_idx = column_index(&headers, y_col, path)?;

    let mut collector = ValidationCollector::new();
    let mut x = Vec::new();
    let mut y = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|e| csv_error(path, e))?;
        let line = i + 2;
        let xv = parse_number(&record, x_idx, x_col, line, &mut collector);
        let yv = parse_number(&record, y_idx, y_col, line, &mut collector);
        if let (Some(xv), Some(yv)) = (xv, yv) {
            x.push(xv);
            y.push(yv);
        }
    }
    collector.finish()?;

    debug!(n_pairs = x.len(), "pairs read");
    Ok((x, y))
}
