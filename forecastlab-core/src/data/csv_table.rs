//! Shared CSV reading for tabular artifacts.
//!
//! Files are read without a header so the caller decides how many leading
//! rows are header rows. The first header row names the columns; any further
//! header rows (the yfinance ticker row) are skipped. The first column is
//! always the index.

use super::dates::parse_index_date;
use super::LoadError;
use crate::domain::{Cell, Row, Table};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use std::path::Path;

/// Read a CSV table whose header spans `header_rows` rows.
pub fn read_table<R: Read>(source: &Path, rdr: R, header_rows: usize) -> Result<Table, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut header: Option<StringRecord> = None;
    let mut seen_headers = 0usize;
    let mut table: Option<Table> = None;

    for result in reader.records() {
        let record = result.map_err(|source_err| LoadError::Csv {
            path: source.to_path_buf(),
            source: source_err,
        })?;

        if seen_headers < header_rows {
            if seen_headers == 0 {
                header = Some(record);
            }
            seen_headers += 1;
            continue;
        }

        let table = table.get_or_insert_with(|| header_to_table(header.as_ref()));
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        table.rows.push(record_to_row(source, &record, table.columns.len(), line)?);
    }

    if seen_headers < header_rows {
        return Err(LoadError::MissingHeader {
            path: source.to_path_buf(),
            expected: header_rows,
            found: seen_headers,
        });
    }

    Ok(table.unwrap_or_else(|| header_to_table(header.as_ref())))
}

fn header_to_table(header: Option<&StringRecord>) -> Table {
    let Some(header) = header else {
        return Table::new("", Vec::new());
    };
    let index_name = header.get(0).unwrap_or_default().to_string();
    let columns = header
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, name)| {
            if name.is_empty() {
                format!("Unnamed: {i}")
            } else {
                name.to_string()
            }
        })
        .collect();
    Table::new(index_name, columns)
}

fn record_to_row(
    source: &Path,
    record: &StringRecord,
    width: usize,
    line: u64,
) -> Result<Row, LoadError> {
    let label = record.get(0).unwrap_or_default().to_string();
    let values = record.len().saturating_sub(1);
    if values > width {
        return Err(LoadError::RaggedRow {
            path: source.to_path_buf(),
            line,
            found: record.len(),
            expected: width + 1,
        });
    }

    let mut cells: Vec<Cell> = record.iter().skip(1).map(Cell::parse).collect();
    cells.resize(width, Cell::Missing);

    Ok(Row {
        date: parse_index_date(&label),
        label,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(src: &str, header_rows: usize) -> Result<Table, LoadError> {
        read_table(Path::new("fixture.csv"), src.as_bytes(), header_rows)
    }

    #[test]
    fn test_single_header_row() {
        let t = read("Date,a,b\n2024-01-02,1,2\n2024-01-03,3,\n", 1).unwrap();
        assert_eq!(t.index_name, "Date");
        assert_eq!(t.columns, vec!["a", "b"]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.rows[1].cells, vec![Cell::Number(3.0), Cell::Missing]);
        assert!(t.rows[0].date.is_some());
    }

    #[test]
    fn test_second_header_row_is_skipped() {
        let t = read("Price,Close\nTicker,TSLA\n2024-01-02,250.0\n", 2).unwrap();
        assert_eq!(t.index_name, "Price");
        assert_eq!(t.columns, vec!["Close"]);
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let t = read("Date,a,b\n2024-01-02,1\n", 1).unwrap();
        assert_eq!(t.rows[0].cells, vec![Cell::Number(1.0), Cell::Missing]);
    }

    #[test]
    fn test_long_rows_are_rejected() {
        let err = read("Date,a\n2024-01-02,1,2\n", 1).unwrap_err();
        assert!(matches!(
            err,
            LoadError::RaggedRow {
                line: 2,
                found: 3,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_unnamed_columns_follow_pandas() {
        let t = read(",,x\n", 1).unwrap();
        assert_eq!(t.index_name, "");
        assert_eq!(t.columns, vec!["Unnamed: 1", "x"]);
        assert!(t.is_empty());
    }

    #[test]
    fn test_missing_header_rows() {
        let err = read("Price,Close\n", 2).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingHeader {
                expected: 2,
                found: 1,
                ..
            }
        ));
        assert!(matches!(
            read("", 1).unwrap_err(),
            LoadError::MissingHeader { found: 0, .. }
        ));
    }
}
