//! Core engine for exploring cricket season statistics.
//!
//! Two record tables (bowling and batting) are loaded once per session into
//! an immutable [`DataContext`]. Filtering and aggregation are pure
//! functions over that context; every derived table is a fresh frame, never
//! an alias into the shared sources. Rendering is an external concern: the
//! engine's obligation ends at well-formed tables and explicit empty-result
//! signals.

pub mod analysis;
pub mod cli;
pub mod error;
pub mod filter;
pub mod schema;
pub mod source;
pub mod statistics;

pub use error::EngineError;

use polars::prelude::DataFrame;
use std::path::Path;

use schema::DatasetKind;

/// The immutable session data: both tables, loaded and schema-validated
/// once, then passed by reference to the filter/aggregate functions.
#[derive(Debug)]
pub struct DataContext {
    pub bowling: DataFrame,
    pub batting: DataFrame,
}

impl DataContext {
    /// Reads both tables and validates each against its dataset schema, so
    /// a missing column is caught at startup rather than mid-analysis.
    ///
    /// Idempotent: repeated loads of the same sources yield equal tables.
    pub fn load(bowling_path: &Path, batting_path: &Path) -> Result<Self, EngineError> {
        let bowling = source::read_table(bowling_path)?;
        schema::validate(&bowling, DatasetKind::Bowling)?;
        let batting = source::read_table(batting_path)?;
        schema::validate(&batting, DatasetKind::Batting)?;
        log::info!(
            "loaded {} bowling rows and {} batting rows",
            bowling.height(),
            batting.height()
        );
        Ok(Self { bowling, batting })
    }
}
