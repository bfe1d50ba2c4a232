use std::fs;
use std::path::Path;

use uft_core::errors::{ErrorInfo, UftError};

use crate::record::ProvenanceRecord;
use crate::serde::to_canonical_json_bytes;

fn exists_error(path: &Path) -> UftError {
    UftError::Provenance(
        ErrorInfo::new("record-exists", "refusing to overwrite an existing record")
            .with_context("path", path.display().to_string())
            .with_hint("exported records are immutable; choose a new path"),
    )
}

fn io_error(code: &str, path: &Path, err: impl ToString) -> UftError {
    UftError::Serde(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Writes the record as canonical JSON to a fresh path.
pub fn write_json(record: &ProvenanceRecord, path: &Path) -> Result<(), UftError> {
    if path.exists() {
        return Err(exists_error(path));
    }
    let bytes = to_canonical_json_bytes(record)?;
    fs::write(path, bytes).map_err(|err| io_error("record-write", path, err))
}

/// Writes the record as a CSV table to a fresh path.
///
/// Columns: `parameter, value, tolerance, source, scheme_version`.
/// Placeholder rows leave the value cell empty rather than inventing one.
pub fn write_csv(record: &ProvenanceRecord, path: &Path) -> Result<(), UftError> {
    if path.exists() {
        return Err(exists_error(path));
    }
    let mut writer =
        csv::Writer::from_path(path).map_err(|err| io_error("record-csv-open", path, err))?;
    writer
        .write_record(["parameter", "value", "tolerance", "source", "scheme_version"])
        .map_err(|err| io_error("record-csv-header", path, err))?;
    for row in &record.rows {
        writer
            .write_record([
                row.parameter.clone(),
                row.value.map(|value| value.to_string()).unwrap_or_default(),
                row.tolerance
                    .map(|tolerance| tolerance.to_string())
                    .unwrap_or_default(),
                row.source.tag().to_string(),
                row.scheme_version.clone(),
            ])
            .map_err(|err| io_error("record-csv-row", path, err))?;
    }
    writer
        .flush()
        .map_err(|err| io_error("record-csv-flush", path, err))
}
