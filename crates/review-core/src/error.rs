use polars::prelude::PolarsError;
use thiserror::Error;

use review_ingest::InputError;
use review_model::SchemaError;

/// Fatal pipeline failures. No partial results accompany these.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to build the scored review table: {0}")]
    Frame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
