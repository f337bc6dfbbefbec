//! Domain types for notebook artifacts.

pub mod summary;
pub mod table;
pub mod ticker;

pub use summary::SummaryRecord;
pub use table::{Cell, Row, Table};
pub use ticker::{Ticker, TickerError};
