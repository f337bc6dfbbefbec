//! Three-valued check outcomes.

use crate::catalog::Task;
use serde::Serialize;
use std::path::PathBuf;

/// Result of evaluating one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    /// The invariant holds.
    Pass,
    /// The invariant is violated; the reason names the artifact and condition.
    Fail(String),
    /// The artifact the check reads has not been generated yet.
    Skipped(String),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped(_))
    }

    /// pytest-style status word.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Pass => "PASSED",
            Outcome::Fail(_) => "FAILED",
            Outcome::Skipped(_) => "SKIPPED",
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Outcome::Pass => None,
            Outcome::Fail(r) | Outcome::Skipped(r) => Some(r),
        }
    }
}

/// One evaluated check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub id: String,
    pub task: Task,
    /// Artifact path relative to the project root.
    pub artifact: PathBuf,
    pub outcome: Outcome,
    pub elapsed_us: u64,
}
