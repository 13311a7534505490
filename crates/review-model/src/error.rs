use thiserror::Error;

/// Structural problems with an input table. Always fatal for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("the CSV must contain a '{0}' column")]
    MissingColumn(String),
}
