//! Per-mode report assembly: filter, short-circuit on empty, aggregate.
//!
//! Each builder returns `Ok(None)` when the filtered (or joined) table has
//! zero rows, so aggregation is never invoked on an empty table. The caller
//! renders a "no matching data" state for `None`.

use polars::prelude::*;

use crate::error::EngineError;
use crate::filter::{self, FilterCriteria};
use crate::schema::{self, DatasetKind};
use crate::statistics::{self, CorrelationMatrix};
use crate::DataContext;

/// Row count of the top-N tables when the caller expresses no preference.
pub const DEFAULT_TOP_N: usize = 10;

/// Derived aggregates for the bowling analysis mode.
pub struct BowlingReport {
    pub filtered: DataFrame,
    pub top_wicket_takers: DataFrame,
    pub country_means: DataFrame,
    pub correlation: CorrelationMatrix,
}

/// Derived aggregates for the batting analysis mode. `filtered` carries the
/// derived `Total_Runs` column.
pub struct BattingReport {
    pub filtered: DataFrame,
    pub top_run_scorers: DataFrame,
    pub country_means: DataFrame,
    pub correlation: CorrelationMatrix,
}

pub fn bowling_report(
    ctx: &DataContext,
    criteria: &FilterCriteria,
    top: usize,
) -> Result<Option<BowlingReport>, EngineError> {
    let filtered = filter::apply(&ctx.bowling, criteria)?;
    if filtered.height() == 0 {
        return Ok(None);
    }
    let kind = DatasetKind::Bowling;
    let top_wicket_takers = statistics::top_n(&filtered, schema::WICKETS, top)?;
    let country_means =
        statistics::group_mean(&filtered, schema::COUNTRY, kind.country_mean_columns())?;
    let correlation = statistics::correlation_matrix(&filtered, kind.correlation_columns())?;
    Ok(Some(BowlingReport {
        filtered,
        top_wicket_takers,
        country_means,
        correlation,
    }))
}

pub fn batting_report(
    ctx: &DataContext,
    criteria: &FilterCriteria,
    top: usize,
) -> Result<Option<BattingReport>, EngineError> {
    let filtered = filter::apply(&ctx.batting, criteria)?;
    if filtered.height() == 0 {
        return Ok(None);
    }
    let filtered = with_total_runs(filtered)?;
    let kind = DatasetKind::Batting;
    let top_run_scorers = statistics::top_n(&filtered, schema::TOTAL_RUNS, top)?;
    let country_means =
        statistics::group_mean(&filtered, schema::COUNTRY, kind.country_mean_columns())?;
    let correlation = statistics::correlation_matrix(&filtered, kind.correlation_columns())?;
    Ok(Some(BattingReport {
        filtered,
        top_run_scorers,
        country_means,
        correlation,
    }))
}

/// Cross-season team comparison: inner join of the two tables on the
/// team-identity and country keys, plus the metric difference column.
///
/// `metric` must exist in both tables; the requested column is validated up
/// front rather than discovered as a join-time failure.
pub fn comparison_report(
    ctx: &DataContext,
    metric: &str,
) -> Result<Option<DataFrame>, EngineError> {
    let compared = statistics::compare(
        &ctx.bowling,
        &ctx.batting,
        &schema::COMPARISON_JOIN_COLUMNS,
        metric,
    )?;
    if compared.height() == 0 {
        return Ok(None);
    }
    Ok(Some(compared))
}

fn with_total_runs(df: DataFrame) -> Result<DataFrame, EngineError> {
    Ok(df
        .lazy()
        .with_column((col(schema::INNINGS) * col(schema::HIGHEST_SCORE)).alias(schema::TOTAL_RUNS))
        .collect()?)
}
