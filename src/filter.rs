//! Filter engine: conjunctive, stable row selection over a record table.
//!
//! Every criterion is optional; supplied criteria are combined with logical
//! AND. The source frame is never mutated and original row order is kept.
//! Zero matching rows is a valid result, not an error.

use polars::prelude::*;

use crate::error::EngineError;
use crate::schema;

/// Inclusive `[low, high]` bounds on a single numeric metric column.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRange {
    pub column: String,
    pub low: f64,
    pub high: f64,
}

impl MetricRange {
    pub fn new(column: impl Into<String>, low: f64, high: f64) -> Self {
        Self {
            column: column.into(),
            low,
            high,
        }
    }
}

/// The optional constraints selecting a subset of a record table.
///
/// `name` is a case-insensitive substring match on the `Name` column; `teams`
/// is exact membership against the current-season team column. An absent (or
/// empty `teams`) criterion places no constraint on that dimension.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub name: Option<String>,
    pub teams: Option<Vec<String>>,
    pub range_a: Option<MetricRange>,
    pub range_b: Option<MetricRange>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.teams.as_ref().map_or(true, |t| t.is_empty())
            && self.range_a.is_none()
            && self.range_b.is_none()
    }
}

/// Returns a new frame holding exactly the rows of `df` satisfying all
/// supplied criteria, in their original relative order.
///
/// Referentially transparent: no I/O, no side effect on `df`. Columns named
/// by the criteria must exist, else `MissingColumn`.
pub fn apply(df: &DataFrame, criteria: &FilterCriteria) -> Result<DataFrame, EngineError> {
    fn and(expr: Expr, acc: &mut Option<Expr>) {
        *acc = Some(match acc.take() {
            Some(current) => current.and(expr),
            None => expr,
        });
    }
    let mut predicate: Option<Expr> = None;

    if let Some(name) = criteria.name.as_deref().filter(|n| !n.is_empty()) {
        schema::ensure_column(df, schema::NAME)?;
        // Escaped literal wrapped in (?i) so the match is substring, not regex.
        let pattern = format!("(?i){}", regex::escape(name));
        and(
            col(schema::NAME).str().contains(lit(pattern), false),
            &mut predicate,
        );
    }

    if let Some(teams) = criteria.teams.as_ref().filter(|t| !t.is_empty()) {
        schema::ensure_column(df, schema::SEASON_TEAM)?;
        let membership = teams
            .iter()
            .map(|team| col(schema::SEASON_TEAM).eq(lit(team.as_str())))
            .reduce(|a, b| a.or(b))
            .unwrap();
        and(membership, &mut predicate);
    }

    for range in [&criteria.range_a, &criteria.range_b].into_iter().flatten() {
        schema::ensure_column(df, &range.column)?;
        let column = col(range.column.as_str());
        and(
            column
                .clone()
                .gt_eq(lit(range.low))
                .and(column.lt_eq(lit(range.high))),
            &mut predicate,
        );
    }

    match predicate {
        None => Ok(df.clone()),
        Some(expr) => Ok(df.clone().lazy().filter(expr).collect()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DataFrame {
        df!(
            "Name" => ["Rashid Khan", "Mohammed Shami", "Piyush Chawla"],
            "2023_Team" => ["GT", "GT", "MI"],
            "Economy" => [8.2, 8.0, 8.1],
        )
        .unwrap()
    }

    #[test]
    fn empty_criteria_is_the_identity() {
        let df = sample();
        let out = apply(&df, &FilterCriteria::default()).unwrap();
        assert!(out.equals(&df));
    }

    #[test]
    fn name_match_ignores_case() {
        let criteria = FilterCriteria {
            name: Some("shami".to_string()),
            ..Default::default()
        };
        let out = apply(&sample(), &criteria).unwrap();
        assert_eq!(out.height(), 1);
    }

    #[test]
    fn empty_team_set_places_no_constraint() {
        let criteria = FilterCriteria {
            teams: Some(vec![]),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        let out = apply(&sample(), &criteria).unwrap();
        assert_eq!(out.height(), 3);
    }

    #[test]
    fn missing_range_column_fails_loudly() {
        let criteria = FilterCriteria {
            range_a: Some(MetricRange::new("Average", 0.0, 50.0)),
            ..Default::default()
        };
        let err = apply(&sample(), &criteria).unwrap_err();
        assert!(matches!(err, EngineError::MissingColumn { column } if column == "Average"));
    }
}
