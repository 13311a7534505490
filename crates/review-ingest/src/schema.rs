//! Schema validation for review tables.

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use review_model::{REVIEW_COLUMN, SchemaError};

use crate::polars_utils::any_to_string;

/// A table known to contain the `Review` column.
///
/// Only [`validate`] constructs this type. The review texts are coerced once
/// at validation time: missing cells become empty strings.
#[derive(Debug, Clone)]
pub struct ValidatedTable {
    frame: DataFrame,
    reviews: Vec<String>,
}

impl ValidatedTable {
    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    /// Review texts in row order.
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }
}

/// Confirms the table has a column named exactly `Review`.
///
/// The frame is returned unchanged on success. A missing column
/// short-circuits the run before any scoring happens.
pub fn validate(frame: DataFrame) -> Result<ValidatedTable, SchemaError> {
    let reviews = {
        let column = frame
            .column(REVIEW_COLUMN)
            .map_err(|_| SchemaError::MissingColumn(REVIEW_COLUMN.to_string()))?;
        (0..column.len())
            .map(|idx| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect::<Vec<_>>()
    };
    debug!(rows = reviews.len(), "review column validated");
    Ok(ValidatedTable { frame, reviews })
}
