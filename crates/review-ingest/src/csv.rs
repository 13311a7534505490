//! CSV loading for review tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::*;
use tracing::{debug, warn};

use crate::error::{InputError, Result};

/// Maximum file size accepted for a review table (200 MB).
pub const MAX_CSV_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Wide tables are still accepted but logged.
const WIDE_TABLE_COLUMNS: usize = 500;

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| InputError::from_io(path, e))?;
    if metadata.len() > max_size {
        return Err(InputError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Reject UTF-16 files up front; the CSV parser only understands UTF-8.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| InputError::from_io(path, e))?;
    let mut buffer = [0u8; 2];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| InputError::from_io(path, e))?;
    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(InputError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(InputError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Reads a review CSV into a `DataFrame`.
///
/// Every column is read as text (schema inference is disabled) so review
/// cells that look numeric cannot break parsing and the original columns are
/// passed through untouched. Empty cells become nulls.
pub fn read_review_csv(path: &Path) -> Result<DataFrame> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)?;
    validate_encoding(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| InputError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| InputError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.width() > WIDE_TABLE_COLUMNS {
        warn!(
            path = %path.display(),
            columns = df.width(),
            "review table has more than {WIDE_TABLE_COLUMNS} columns"
        );
    }
    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read review csv"
    );
    Ok(df)
}
