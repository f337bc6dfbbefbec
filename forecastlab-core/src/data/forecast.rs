//! Forecast series loader (`arima_forecast.csv`, `lstm_forecast.csv`).
//!
//! A single header row, the first column holding the forecast dates. Rows
//! are never dropped here: a row with an unparseable date keeps `date: None`.

use super::csv_table::read_table;
use super::LoadError;
use crate::domain::Table;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Load a forecast series from disk.
pub fn load_forecast_series(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_forecast_series(path, BufReader::new(file))
}

/// Parse a forecast series from any reader; `source` is used in errors.
pub fn parse_forecast_series<R: Read>(source: &Path, rdr: R) -> Result<Table, LoadError> {
    let table = read_table(source, rdr, 1)?;
    debug!(
        path = %source.display(),
        rows = table.len(),
        columns = ?table.columns,
        undated_rows = table.undated_rows(),
        "loaded forecast series"
    );
    Ok(table)
}
