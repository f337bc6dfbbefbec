//! ForecastLab Core: artifact model, loaders and validators.
//!
//! This crate knows how to read what the forecasting notebooks leave behind
//! and how to judge it:
//! - Domain types (tickers, cells, tables, summary records)
//! - Loaders for cleaned price series (two-row header), forecast series and
//!   JSON summary records
//! - Validators for existence, nulls, required columns, positivity and
//!   summary keys
//!
//! Nothing here writes to disk; every operation is a read followed by a
//! predicate.

pub mod data;
pub mod domain;
pub mod validate;

pub use data::{load_forecast_series, load_price_series, load_summary, LoadError};
pub use domain::{Cell, Row, SummaryRecord, Table, Ticker, TickerError};
pub use validate::ValidationError;
