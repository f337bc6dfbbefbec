use super::ValidationError;
use crate::domain::{Cell, Table};
use std::path::Path;

/// Every value in `column` must be a number strictly greater than zero.
///
/// Missing and non-numeric cells fail the comparison, mirroring `> 0` on a
/// float column where NaN compares false. An empty column passes.
pub fn require_positive(artifact: &Path, table: &Table, column: &str) -> Result<(), ValidationError> {
    let values = table
        .column(column)
        .ok_or_else(|| ValidationError::MissingColumn {
            artifact: artifact.to_path_buf(),
            column: column.to_string(),
        })?;

    for (row, cell) in values {
        let positive = matches!(cell, Cell::Number(v) if *v > 0.0);
        if !positive {
            return Err(ValidationError::NonPositive {
                artifact: artifact.to_path_buf(),
                column: column.to_string(),
                row: row.label.clone(),
                value: cell.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Row;
    use proptest::prelude::*;

    fn forecast(values: &[Cell]) -> Table {
        let mut t = Table::new("Date", vec!["arima_forecast".into()]);
        for (i, v) in values.iter().enumerate() {
            t.rows.push(Row {
                label: format!("day{i}"),
                date: None,
                cells: vec![v.clone()],
            });
        }
        t
    }

    #[test]
    fn test_negative_value_names_file() {
        let t = forecast(&[Cell::Number(410.0), Cell::Number(-1.5)]);
        let err = require_positive(Path::new("arima_forecast.csv"), &t, "arima_forecast").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                artifact: "arima_forecast.csv".into(),
                column: "arima_forecast".into(),
                row: "day1".into(),
                value: "-1.5".into(),
            }
        );
        assert!(err.to_string().contains("arima_forecast.csv"));
    }

    #[test]
    fn test_zero_missing_and_text_fail() {
        for bad in [Cell::Number(0.0), Cell::Missing, Cell::Text("n/a?".into())] {
            let t = forecast(&[bad]);
            assert!(require_positive(Path::new("f.csv"), &t, "arima_forecast").is_err());
        }
    }

    #[test]
    fn test_empty_column_passes_and_absent_column_fails() {
        let t = forecast(&[]);
        assert_eq!(require_positive(Path::new("f.csv"), &t, "arima_forecast"), Ok(()));
        assert!(matches!(
            require_positive(Path::new("f.csv"), &t, "lstm_forecast"),
            Err(ValidationError::MissingColumn { .. })
        ));
    }

    proptest! {
        #[test]
        fn strictly_positive_series_pass(values in proptest::collection::vec(1e-6f64..1e6, 0..50)) {
            let cells: Vec<Cell> = values.into_iter().map(Cell::Number).collect();
            let t = forecast(&cells);
            prop_assert!(require_positive(Path::new("f.csv"), &t, "arima_forecast").is_ok());
        }

        #[test]
        fn one_non_positive_value_fails(
            values in proptest::collection::vec(1e-6f64..1e6, 1..50),
            bad in -1e6f64..=0.0,
            pos in any::<prop::sample::Index>(),
        ) {
            let mut cells: Vec<Cell> = values.into_iter().map(Cell::Number).collect();
            let at = pos.index(cells.len());
            cells[at] = Cell::Number(bad);
            let t = forecast(&cells);
            let err = require_positive(Path::new("f.csv"), &t, "arima_forecast").unwrap_err();
            let is_non_positive = matches!(err, ValidationError::NonPositive { ref row, .. } if *row == format!("day{at}"));
            prop_assert!(is_non_positive);
        }
    }
}
