//! Date-indexed tables read from CSV artifacts.
//!
//! A table is an index column (dates, as written by pandas) plus a set of
//! named value columns. Cells keep the distinction pandas makes between a
//! missing value, a number and free text, because the validators care
//! about exactly that distinction.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Spellings pandas reads as NA by default.
const NA_TOKENS: [&str; 18] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "null",
];

/// A single value cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Cell {
    Missing,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Classify a raw CSV field.
    pub fn parse(raw: &str) -> Self {
        let field = raw.trim();
        if field.eq_ignore_ascii_case("nan") || NA_TOKENS.contains(&field) {
            return Cell::Missing;
        }
        match field.parse::<f64>() {
            Ok(v) if v.is_nan() => Cell::Missing,
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(field.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Missing => f.write_str("NaN"),
            Cell::Number(v) => write!(f, "{v}"),
            Cell::Text(s) => write!(f, "{s:?}"),
        }
    }
}

/// One data row: the raw index label, its parsed date and the value cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub label: String,
    pub date: Option<NaiveDateTime>,
    pub cells: Vec<Cell>,
}

impl Row {
    /// True when every value cell is missing (the index is not considered).
    pub fn is_all_missing(&self) -> bool {
        self.cells.iter().all(Cell::is_missing)
    }
}

/// A loaded tabular artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub index_name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(index_name: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            index_name: index_name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate `(row, cell)` pairs of one column. `None` if the column is absent.
    pub fn column<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = (&'a Row, &'a Cell)>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| (row, &row.cells[idx])))
    }

    /// Total number of missing cells across every column.
    pub fn null_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.cells.iter().filter(|c| c.is_missing()).count())
            .sum()
    }

    /// First missing cell as `(row label, column name)`.
    pub fn first_null(&self) -> Option<(&str, &str)> {
        self.rows.iter().find_map(|row| {
            row.cells
                .iter()
                .position(Cell::is_missing)
                .map(|i| (row.label.as_str(), self.columns[i].as_str()))
        })
    }

    /// Number of rows whose index did not parse as a date.
    pub fn undated_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.date.is_none()).count()
    }
}
