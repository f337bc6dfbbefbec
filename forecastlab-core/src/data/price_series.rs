//! Cleaned price series loader (`{TICKER}_clean.csv`).
//!
//! yfinance writes a two-level column header: the price-field row
//! (`Price,Close,High,Low,Open,Volume`) and a ticker-label row
//! (`Ticker,TSLA,TSLA,...`). Older exports also carry a `Date,,,,,` row
//! naming the index. Loading:
//! 1. Collapse the header to the price-field row
//! 2. Drop rows whose value cells are all missing (residual label rows)
//! 3. Drop rows whose index is not a date
//!
//! If rows remain after step 2 but none of them is dated, the index format
//! is unknown and loading fails instead of yielding an empty table.

use super::csv_table::read_table;
use super::LoadError;
use crate::domain::Table;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Header rows in a yfinance multi-index export.
pub const PRICE_HEADER_ROWS: usize = 2;

/// The OHLCV columns every cleaned series must carry.
pub const OHLCV_COLUMNS: [&str; 5] = ["Open", "High", "Low", "Close", "Volume"];

/// Load a cleaned price series from disk.
pub fn load_price_series(path: &Path) -> Result<Table, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_price_series(path, BufReader::new(file))
}

/// Parse a cleaned price series from any reader; `source` is used in errors.
pub fn parse_price_series<R: Read>(source: &Path, rdr: R) -> Result<Table, LoadError> {
    let mut table = read_table(source, rdr, PRICE_HEADER_ROWS)?;
    let raw_rows = table.len();

    table.rows.retain(|row| !row.is_all_missing());
    let empty_rows = raw_rows - table.len();

    let before_dates = table.len();
    if before_dates > 0 && table.rows.iter().all(|row| row.date.is_none()) {
        return Err(LoadError::NoDatedRows {
            path: source.to_path_buf(),
            rows: before_dates,
            first_label: table.rows[0].label.clone(),
        });
    }
    table.rows.retain(|row| row.date.is_some());
    let undated_rows = before_dates - table.len();

    debug!(
        path = %source.display(),
        rows = table.len(),
        empty_rows,
        undated_rows,
        "loaded price series"
    );
    Ok(table)
}
