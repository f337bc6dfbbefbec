//! A single named check and its evaluation against a project root.
//!
//! Existence checks fail when the artifact is absent. Every other check
//! reads the artifact and reports `Skipped` when it is absent, since the
//! notebooks that produce it run out of process.

use crate::catalog::Task;
use crate::outcome::{CheckResult, Outcome};
use forecastlab_core::validate::{
    require_columns, require_file, require_keys, require_no_nulls, require_positive,
    require_sub_record_models, ValidationError,
};
use forecastlab_core::{load_forecast_series, load_price_series, load_summary};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, warn};

/// What a check asserts about its artifact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckKind {
    /// The artifact is a regular file.
    FileExists,
    /// Cleaned price series has zero missing cells.
    PriceSeriesNoNulls,
    /// Cleaned price series carries every listed column.
    PriceSeriesColumns { columns: Vec<String> },
    /// Forecast series has zero missing cells.
    ForecastNoNulls,
    /// Every value in the forecast column is > 0.
    ForecastPositive { column: String },
    /// Summary record has every listed top-level key.
    SummaryKeys { keys: Vec<String> },
    /// The object under `field` has a key containing each model name.
    SummaryModels { field: String, models: Vec<String> },
}

impl CheckKind {
    /// Whether an absent artifact means skip rather than fail.
    pub fn skips_when_absent(&self) -> bool {
        !matches!(self, CheckKind::FileExists)
    }
}

/// A named, runnable check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Check {
    /// Stable id: `task::name[param]`.
    pub id: String,
    pub task: Task,
    /// Artifact path relative to the project root.
    pub artifact: PathBuf,
    #[serde(flatten)]
    pub kind: CheckKind,
}

impl Check {
    pub fn new(id: impl Into<String>, task: Task, artifact: impl Into<PathBuf>, kind: CheckKind) -> Self {
        Self {
            id: id.into(),
            task,
            artifact: artifact.into(),
            kind,
        }
    }

    /// Evaluate against a project root. Never panics on bad artifacts.
    pub fn run(&self, root: &Path) -> CheckResult {
        let started = Instant::now();
        let outcome = self.evaluate(&root.join(&self.artifact));
        let elapsed_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        match &outcome {
            Outcome::Skipped(reason) => warn!(check = %self.id, "skipped: {reason}"),
            Outcome::Fail(reason) => debug!(check = %self.id, "failed: {reason}"),
            Outcome::Pass => debug!(check = %self.id, "passed"),
        }

        CheckResult {
            id: self.id.clone(),
            task: self.task,
            artifact: self.artifact.clone(),
            outcome,
            elapsed_us,
        }
    }

    fn evaluate(&self, path: &Path) -> Outcome {
        if self.kind.skips_when_absent() && !path.exists() {
            return Outcome::Skipped(format!(
                "{} not yet generated; run {} first",
                self.artifact.display(),
                self.task.notebook()
            ));
        }

        match self.assert_invariant(path) {
            Ok(()) => Outcome::Pass,
            Err(reason) => Outcome::Fail(reason),
        }
    }

    fn assert_invariant(&self, path: &Path) -> Result<(), String> {
        let artifact = self.artifact.as_path();
        let verdict: Result<(), ValidationError> = match &self.kind {
            CheckKind::FileExists => require_file(path).map_err(|e| relabel(e, artifact)),
            CheckKind::PriceSeriesNoNulls => {
                let table = load_price_series(path).map_err(|e| e.to_string())?;
                require_no_nulls(artifact, &table)
            }
            CheckKind::PriceSeriesColumns { columns } => {
                let table = load_price_series(path).map_err(|e| e.to_string())?;
                require_columns(artifact, &table, columns.as_slice())
            }
            CheckKind::ForecastNoNulls => {
                let table = load_forecast_series(path).map_err(|e| e.to_string())?;
                require_no_nulls(artifact, &table)
            }
            CheckKind::ForecastPositive { column } => {
                let table = load_forecast_series(path).map_err(|e| e.to_string())?;
                require_positive(artifact, &table, column)
            }
            CheckKind::SummaryKeys { keys } => {
                let mut record = load_summary(path).map_err(|e| e.to_string())?;
                record.path = artifact.to_path_buf();
                require_keys(&record, keys.as_slice())
            }
            CheckKind::SummaryModels { field, models } => {
                let mut record = load_summary(path).map_err(|e| e.to_string())?;
                record.path = artifact.to_path_buf();
                require_sub_record_models(&record, field, models.as_slice())
            }
        };
        verdict.map_err(|e| e.to_string())
    }
}

/// Report existence failures by the root-relative path.
fn relabel(err: ValidationError, artifact: &Path) -> ValidationError {
    match err {
        ValidationError::MissingArtifact { .. } => ValidationError::MissingArtifact {
            path: artifact.to_path_buf(),
        },
        ValidationError::NotAFile { .. } => ValidationError::NotAFile {
            path: artifact.to_path_buf(),
        },
        other => other,
    }
}
