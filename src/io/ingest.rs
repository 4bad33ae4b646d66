//! CSV ingest.
//!
//! Turns a delimited table into a dense numeric `Dataset`:
//! - the header row is skipped unconditionally
//! - the first column (row identifier) is skipped unconditionally
//! - every remaining cell must parse as `f64` exactly as written (no trimming)
//!
//! There are no column-role options. Any failure aborts the load; no partially
//! parsed table is ever returned.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use log::{debug, warn};
use nalgebra::DMatrix;

use crate::domain::Dataset;
use crate::error::AppError;

/// Load a CSV file into a numeric matrix (header row and identifier column dropped).
pub fn load_dataset(path: &Path) -> Result<Dataset, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::io(format!("Failed to open CSV '{}': {e}", path.display())))?;

    // The file handle is owned by the reader and dropped on every return path.
    let dataset = read_dataset(file).map_err(|e| e.context(path.display()))?;

    if dataset.n_rows() == 0 {
        warn!("'{}' has a header but no data rows", path.display());
    }
    debug!(
        "loaded '{}': {} rows x {} numeric columns",
        path.display(),
        dataset.n_rows(),
        dataset.n_cols()
    );

    Ok(dataset)
}

/// Parse CSV from any reader. Split out from `load_dataset` for in-memory tests.
pub fn read_dataset<R: Read>(input: R) -> Result<Dataset, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let header_len = reader.headers().map_err(csv_error)?.len();
    if header_len < 2 {
        return Err(AppError::parse(
            "CSV needs an identifier column and at least one numeric column.",
        ));
    }
    let n_cols = header_len - 1;

    let mut values = Vec::new();
    let mut n_rows = 0usize;
    let mut record = StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(e) => return Err(csv_error(e)),
        }
        // Fallback: data starts on the line after the header and lines are 1-based.
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(n_rows + 2);
        parse_row(&record, line, &mut values)?;
        n_rows += 1;
    }

    Ok(Dataset::new(DMatrix::from_row_slice(n_rows, n_cols, &values)))
}

fn parse_row(record: &StringRecord, line: usize, out: &mut Vec<f64>) -> Result<(), AppError> {
    for (col, cell) in record.iter().enumerate().skip(1) {
        let value = cell.parse::<f64>().map_err(|_| {
            AppError::parse(format!(
                "Non-numeric value '{cell}' at line {line}, column {}",
                col + 1
            ))
        })?;
        out.push(value);
    }
    Ok(())
}

fn csv_error(e: csv::Error) -> AppError {
    if e.is_io_error() {
        return AppError::io(format!("Failed to read CSV: {e}"));
    }
    match e.kind() {
        csv::ErrorKind::UnequalLengths { pos, expected_len, len } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or(0);
            AppError::parse(format!(
                "Malformed row at line {line}: expected {expected_len} fields, found {len}"
            ))
        }
        _ => AppError::parse(format!("CSV parse error: {e}")),
    }
}
