//! ForecastLab Runner: check catalog, suite runner and reports.
//!
//! This crate builds on `forecastlab-core` to provide:
//! - Artifact layout configuration (TOML, with notebook defaults)
//! - The catalog of named checks for the EDA and forecasting notebooks
//! - Pass / fail / skip evaluation of each check
//! - Serial or rayon-parallel suite runs
//! - Text and JSON reports, plus a BLAKE3 artifact inventory

pub mod catalog;
pub mod check;
pub mod config;
pub mod inventory;
pub mod outcome;
pub mod report;
pub mod suite;

pub use catalog::{Catalog, Task};
pub use check::{Check, CheckKind};
pub use config::{ConfigError, ForecastFile, LayoutConfig, Task1Config, Task2Config};
pub use inventory::{Inventory, InventoryEntry, InventoryError};
pub use outcome::{CheckResult, Outcome};
pub use report::{SuiteReport, Summary};
pub use suite::{run_checks, RunOptions};
