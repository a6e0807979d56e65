//! Dataset loading: one CSV per record table, read once per session.
//!
//! Pure I/O. Column names are trimmed of surrounding whitespace; everything
//! else (names, dtypes) is whatever the source provides. Schema validation
//! happens in [`crate::DataContext::load`], not here.

use polars::prelude::*;
use std::path::Path;

use crate::error::EngineError;

/// Reads a delimited file with a header row into a `DataFrame`.
///
/// A missing or malformed source becomes `EngineError::DataSource`; there is
/// no partial-load recovery.
pub fn read_table(path: &Path) -> Result<DataFrame, EngineError> {
    read_csv(path).map_err(|source| EngineError::DataSource {
        path: path.to_path_buf(),
        source,
    })
}

fn read_csv(path: &Path) -> PolarsResult<DataFrame> {
    let df = CsvReadOptions::default()
        .map_parse_options(|opts| opts.with_try_parse_dates(false))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;
    log::debug!(
        "read {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );
    trim_column_names(df)
}

/// Scraped season tables tend to carry padded headers like `" Economy"`.
fn trim_column_names(df: DataFrame) -> PolarsResult<DataFrame> {
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let trimmed: Vec<String> = names.iter().map(|s| s.trim().to_string()).collect();
    if names == trimmed {
        return Ok(df);
    }
    df.lazy()
        .rename(
            names.iter().map(|s| s.as_str()),
            trimmed.iter().map(|s| s.as_str()),
            false,
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_table_trims_padded_header_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("padded.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "Name, Economy ,Wickets").unwrap();
        writeln!(file, "A,6.5,12").unwrap();
        let df = read_table(&path).unwrap();
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["Name", "Economy", "Wickets"]);
    }

    #[test]
    fn missing_file_is_a_data_source_error() {
        let err = read_table(Path::new("/nonexistent/2023_bowling.csv")).unwrap_err();
        assert!(matches!(err, EngineError::DataSource { .. }));
    }
}
