//! Typed dataset schemas for the two record tables.
//!
//! Column names are validated once at load time so a missing column surfaces
//! as a startup error instead of failing at an arbitrary call site.

use polars::prelude::DataFrame;

use crate::error::EngineError;

pub const NAME: &str = "Name";
pub const COUNTRY: &str = "Country";
pub const PRIOR_SEASON_TEAM: &str = "2022_Team";
pub const SEASON_TEAM: &str = "2023_Team";

pub const ECONOMY: &str = "Economy";
pub const AVERAGE: &str = "Average";
pub const STRIKE_RATE: &str = "Strike_Rate";
pub const WICKETS: &str = "Wickets";
pub const HIGHEST_SCORE: &str = "Highest_Score";
pub const INNINGS: &str = "Innings";
pub const FOURS: &str = "Fours";
pub const SIXES: &str = "Sixes";
pub const FIFTIES: &str = "Fifties";
pub const HUNDREDS: &str = "Hundreds";

/// Derived batting column: `Innings * Highest_Score`.
pub const TOTAL_RUNS: &str = "Total_Runs";

/// Suffix applied to the prior-season side of a cross-season join.
pub const PRIOR_SEASON_SUFFIX: &str = "_2022";

/// Join keys for the cross-season team comparison.
pub const COMPARISON_JOIN_COLUMNS: [&str; 3] = [PRIOR_SEASON_TEAM, SEASON_TEAM, COUNTRY];

/// Which of the two record tables a frame is expected to conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Bowling,
    Batting,
}

impl DatasetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Bowling => "bowling",
            DatasetKind::Batting => "batting",
        }
    }

    /// Columns that must be present for this dataset to be usable.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Bowling => &[
                NAME,
                COUNTRY,
                PRIOR_SEASON_TEAM,
                SEASON_TEAM,
                ECONOMY,
                AVERAGE,
                STRIKE_RATE,
                WICKETS,
            ],
            DatasetKind::Batting => &[
                NAME,
                COUNTRY,
                PRIOR_SEASON_TEAM,
                SEASON_TEAM,
                STRIKE_RATE,
                HIGHEST_SCORE,
                INNINGS,
                FOURS,
                SIXES,
                FIFTIES,
                HUNDREDS,
            ],
        }
    }

    /// The two metric columns the range sliders apply to, in (range_a, range_b) order.
    pub fn range_columns(&self) -> (&'static str, &'static str) {
        match self {
            DatasetKind::Bowling => (ECONOMY, AVERAGE),
            DatasetKind::Batting => (STRIKE_RATE, HIGHEST_SCORE),
        }
    }

    /// Metric columns averaged per country for the country comparison chart.
    pub fn country_mean_columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Bowling => &[WICKETS, ECONOMY, STRIKE_RATE],
            DatasetKind::Batting => &[STRIKE_RATE, FIFTIES, HUNDREDS],
        }
    }

    /// Numeric columns fed to the correlation heatmap.
    pub fn correlation_columns(&self) -> &'static [&'static str] {
        match self {
            DatasetKind::Bowling => &[AVERAGE, ECONOMY, STRIKE_RATE, WICKETS],
            DatasetKind::Batting => &[STRIKE_RATE, HUNDREDS, FIFTIES, FOURS, SIXES],
        }
    }
}

/// Errors with `MissingColumn` when `column` is not in the frame's schema.
pub fn ensure_column(df: &DataFrame, column: &str) -> Result<(), EngineError> {
    if df.schema().get(column).is_some() {
        Ok(())
    } else {
        Err(EngineError::MissingColumn {
            column: column.to_string(),
        })
    }
}

/// Validates that every required column of `kind` is present.
pub fn validate(df: &DataFrame, kind: DatasetKind) -> Result<(), EngineError> {
    for column in kind.required_columns() {
        ensure_column(df, column)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn ensure_column_reports_the_missing_name() {
        let df = df!("Name" => ["A"]).unwrap();
        assert!(ensure_column(&df, "Name").is_ok());
        match ensure_column(&df, "Wickets") {
            Err(EngineError::MissingColumn { column }) => assert_eq!(column, "Wickets"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn validate_requires_every_bowling_column() {
        let df = df!(
            "Name" => ["A"],
            "Country" => ["India"],
            "2022_Team" => ["CSK"],
            "2023_Team" => ["CSK"],
            "Economy" => [6.0],
            "Average" => [20.0],
            "Strike_Rate" => [15.0],
        )
        .unwrap();
        assert!(validate(&df, DatasetKind::Bowling).is_err()); // Wickets absent
    }
}
