//! Pure, stateless aggregations over filtered record tables.
//!
//! Callers short-circuit on empty tables before invoking these; the
//! functions themselves never panic on degenerate input and propagate
//! undefined values (all-null means, zero-variance correlations) as
//! null/NaN rather than coercing to zero.

use polars::prelude::*;
use std::fmt;

use crate::error::EngineError;
use crate::schema::{self, ensure_column};

/// The `n` rows with the largest `metric` value, descending, ties broken by
/// original row order. Nulls sort last. Fewer than `n` rows returns all
/// rows, still sorted.
pub fn top_n(df: &DataFrame, metric: &str, n: usize) -> Result<DataFrame, EngineError> {
    ensure_column(df, metric)?;
    let options = SortMultipleOptions::default()
        .with_order_descending(true)
        .with_maintain_order(true)
        .with_nulls_last(true);
    Ok(df.sort([metric], options)?.head(Some(n)))
}

/// One row per distinct `group_col` value (first-appearance order) holding
/// the arithmetic mean of each metric column within that group.
///
/// A metric with no numeric values in a group yields null, never zero.
pub fn group_mean(
    df: &DataFrame,
    group_col: &str,
    metric_cols: &[&str],
) -> Result<DataFrame, EngineError> {
    ensure_column(df, group_col)?;
    for column in metric_cols {
        ensure_column(df, column)?;
    }
    let aggs: Vec<Expr> = metric_cols.iter().map(|c| col(*c).mean()).collect();
    Ok(df
        .clone()
        .lazy()
        .group_by_stable([col(group_col)])
        .agg(aggs)
        .collect()?)
}

/// Square matrix of Pearson correlation coefficients.
///
/// Undefined entries (zero variance, fewer than two complete pairs) are NaN.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub columns: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .columns
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(0)
            .max(6);
        write!(f, "{:width$}", "")?;
        for column in &self.columns {
            write!(f, " {:>width$}", column)?;
        }
        writeln!(f)?;
        for (column, row) in self.columns.iter().zip(&self.values) {
            write!(f, "{:width$}", column)?;
            for value in row {
                write!(f, " {:>width$.3}", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Pearson correlation matrix over `metric_cols`, nulls dropped pairwise.
///
/// A column with zero variance yields NaN for every pair involving it,
/// including its own diagonal; defined diagonals are exactly 1.0. The matrix
/// is symmetric by construction.
pub fn correlation_matrix(
    df: &DataFrame,
    metric_cols: &[&str],
) -> Result<CorrelationMatrix, EngineError> {
    let mut columns = Vec::with_capacity(metric_cols.len());
    for column in metric_cols {
        ensure_column(df, column)?;
        columns.push(numeric_values(df, column)?);
    }

    let n = metric_cols.len();
    let mut values = vec![vec![f64::NAN; n]; n];
    for i in 0..n {
        values[i][i] = pearson(&columns[i], &columns[i]);
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        columns: metric_cols.iter().map(|s| s.to_string()).collect(),
        values,
    })
}

fn numeric_values(df: &DataFrame, column: &str) -> Result<Vec<Option<f64>>, EngineError> {
    let series = df
        .column(column)?
        .as_materialized_series()
        .cast(&DataType::Float64)?;
    Ok(series.f64()?.into_iter().collect())
}

/// Pearson coefficient over pairwise-complete values. NaN when fewer than
/// two complete pairs exist or either side has zero variance.
fn pearson(a: &[Option<f64>], b: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = a
        .iter()
        .zip(b.iter())
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .collect();
    if pairs.len() < 2 {
        return f64::NAN;
    }

    let len = pairs.len() as f64;
    let mean_a: f64 = pairs.iter().map(|(x, _)| x).sum::<f64>() / len;
    let mean_b: f64 = pairs.iter().map(|(_, y)| y).sum::<f64>() / len;

    let numerator: f64 = pairs
        .iter()
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    let var_a: f64 = pairs.iter().map(|(x, _)| (x - mean_a).powi(2)).sum();
    let var_b: f64 = pairs.iter().map(|(_, y)| (y - mean_b).powi(2)).sum();

    if var_a == 0.0 || var_b == 0.0 {
        return f64::NAN;
    }
    numerator / (var_a.sqrt() * var_b.sqrt())
}

/// Inner-joins `a` and `b` on `join_cols` and appends
/// `<metric>_Difference = a.metric - b.metric`.
///
/// Overlapping non-key columns from `b` carry the prior-season suffix, so
/// `metric` must exist on both sides. Rows without a key match on both sides
/// are dropped; zero joined rows is a valid result.
pub fn compare(
    a: &DataFrame,
    b: &DataFrame,
    join_cols: &[&str],
    metric: &str,
) -> Result<DataFrame, EngineError> {
    for column in join_cols {
        ensure_column(a, column)?;
        ensure_column(b, column)?;
    }
    ensure_column(a, metric)?;
    ensure_column(b, metric)?;

    let on: Vec<Expr> = join_cols.iter().map(|c| col(*c)).collect();
    let args =
        JoinArgs::new(JoinType::Inner).with_suffix(Some(schema::PRIOR_SEASON_SUFFIX.into()));
    let prior_metric = format!("{metric}{}", schema::PRIOR_SEASON_SUFFIX);
    let difference = format!("{metric}_Difference");

    Ok(a.clone()
        .lazy()
        .join(b.clone().lazy(), on.clone(), on, args)
        .with_column((col(metric) - col(prior_metric.as_str())).alias(difference))
        .collect()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pearson_is_unit_for_a_column_against_itself() {
        let a = vec![Some(1.0), Some(2.0), Some(3.0)];
        assert!((pearson(&a, &a) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn pearson_zero_variance_is_nan() {
        let flat = vec![Some(5.0), Some(5.0), Some(5.0)];
        let ramp = vec![Some(1.0), Some(2.0), Some(3.0)];
        assert!(pearson(&flat, &ramp).is_nan());
        assert!(pearson(&flat, &flat).is_nan());
    }

    #[test]
    fn pearson_drops_incomplete_pairs() {
        let a = vec![Some(1.0), None, Some(3.0), Some(4.0)];
        let b = vec![Some(2.0), Some(9.0), Some(6.0), Some(8.0)];
        // Complete pairs (1,2), (3,6), (4,8) are exactly proportional.
        assert!((pearson(&a, &b) - 1.0).abs() < 1e-12);
    }
}
