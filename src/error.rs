//! Error taxonomy for the loading and aggregation engine.
//!
//! Empty results are values, not errors: filtering or joining down to zero
//! rows is a valid terminal state and is represented by empty frames or
//! `Ok(None)` at the report layer.

use polars::prelude::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A required input table could not be read or parsed. Fatal to the
    /// session, surfaced to the user, never retried.
    #[error("failed to read dataset {}: {source}", path.display())]
    DataSource { path: PathBuf, source: PolarsError },

    /// A column requested for filtering or aggregation does not exist in the
    /// table. Indicates a mismatched dataset schema and fails loudly instead
    /// of silently skipping the criterion.
    #[error("column '{column}' does not exist in the table")]
    MissingColumn { column: String },

    #[error(transparent)]
    Polars(#[from] PolarsError),
}
