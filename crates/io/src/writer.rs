//! CSV and JSON writers for any `Serialize` row type.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::IoError;
use crate::validate::csv_error;

/// Write `rows` as CSV under an explicit `header`. `None` fields become
/// empty cells.
///
/// The header is written even when `rows` is empty, so an empty table keeps
/// its column layout. `header` must list the row type's serialised field
/// names in declaration order.
///
/// # Errors
///
/// Returns [`IoError::Csv`] if the file cannot be created or a record fails
/// to serialise, and [`IoError::Io`] if the final flush fails.
#[tracing::instrument(skip_all, fields(path = %path.display(), n_rows = rows.len()))]
pub fn write_csv<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<(), IoError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| csv_error(path, e))?;
    writer.write_record(header).map_err(|e| csv_error(path, e))?;
    for row in rows {
        writer.serialize(row).map_err(|e| csv_error(path, e))?;
    }
    writer.flush().map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("csv written");
    Ok(())
}

/// Write `value` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Json`] on serialisation failure and [`IoError::Io`]
/// if the file cannot be written.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "json written");
    Ok(())
}
