//! Review table ingestion.
//!
//! This crate turns an uploaded (or bundled sample) CSV file into a Polars
//! `DataFrame` and checks it carries the mandatory `Review` column.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use review_ingest::{read_review_csv, resolve_input, validate};
//!
//! let source = resolve_input(None, Path::new("."))?;
//! let frame = read_review_csv(source.path())?;
//! let table = validate(frame)?;
//! println!("{} reviews", table.height());
//! ```

mod csv;
mod error;
mod polars_utils;
mod schema;
mod source;

pub use csv::{MAX_CSV_FILE_SIZE, check_file_size_with_limit, read_review_csv, validate_encoding};
pub use error::{InputError, Result};
pub use polars_utils::{any_to_string, format_numeric};
pub use schema::{ValidatedTable, validate};
pub use source::{DEFAULT_SAMPLE_FILE, InputSource, fingerprint_file, resolve_input};
