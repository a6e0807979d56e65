//! Command-line definitions for the crease binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which analysis to run over the loaded tables.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum Mode {
    /// Bowling performance analysis
    Bowling,
    /// Batting performance analysis
    Batting,
    /// 2022 vs 2023 cross-season team comparison
    Comparison,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Explore cricket season statistics from bowling and batting tables"
)]
pub struct Args {
    /// Bowling statistics CSV
    pub bowling: PathBuf,

    /// Batting statistics CSV
    pub batting: PathBuf,

    /// Analysis to run
    #[arg(long, value_enum, default_value = "bowling")]
    pub mode: Mode,

    /// Case-insensitive substring match on player name
    #[arg(long)]
    pub player: Option<String>,

    /// Restrict to these current-season teams (repeatable)
    #[arg(long = "team")]
    pub teams: Vec<String>,

    /// Inclusive LOW:HIGH bounds on the first metric (bowling: Economy, batting: Strike_Rate)
    #[arg(long = "range-a", value_parser = parse_range)]
    pub range_a: Option<(f64, f64)>,

    /// Inclusive LOW:HIGH bounds on the second metric (bowling: Average, batting: Highest_Score)
    #[arg(long = "range-b", value_parser = parse_range)]
    pub range_b: Option<(f64, f64)>,

    /// Number of rows in the top-N tables
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Metric column for comparison mode; must exist in both tables
    #[arg(long, default_value = "Strike_Rate")]
    pub metric: String,
}

fn parse_range(s: &str) -> Result<(f64, f64), String> {
    let (low, high) = s
        .split_once(':')
        .ok_or_else(|| format!("expected LOW:HIGH, got '{s}'"))?;
    let low: f64 = low
        .trim()
        .parse()
        .map_err(|_| format!("invalid lower bound '{low}'"))?;
    let high: f64 = high
        .trim()
        .parse()
        .map_err(|_| format!("invalid upper bound '{high}'"))?;
    if low > high {
        return Err(format!("lower bound {low} exceeds upper bound {high}"));
    }
    Ok((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_range_accepts_low_high() {
        assert_eq!(parse_range("0:8"), Ok((0.0, 8.0)));
        assert_eq!(parse_range(" 2.5 : 9.75 "), Ok((2.5, 9.75)));
    }

    #[test]
    fn parse_range_rejects_inverted_and_malformed_input() {
        assert!(parse_range("9:2").is_err());
        assert!(parse_range("abc").is_err());
        assert!(parse_range("1:x").is_err());
    }
}
