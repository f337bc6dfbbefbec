//! Suite reports: text for terminals, JSON for machines.

use crate::outcome::CheckResult;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.passed + self.failed + self.skipped
    }
}

/// Everything a suite run produced.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub root: PathBuf,
    pub results: Vec<CheckResult>,
    pub summary: Summary,
    pub elapsed_ms: u64,
}

impl SuiteReport {
    pub fn new(root: &Path, results: Vec<CheckResult>, elapsed: Duration) -> Self {
        let mut summary = Summary::default();
        for r in &results {
            if r.outcome.is_pass() {
                summary.passed += 1;
            } else if r.outcome.is_fail() {
                summary.failed += 1;
            } else {
                summary.skipped += 1;
            }
        }
        Self {
            root: root.to_path_buf(),
            results,
            summary,
            elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        }
    }

    pub fn summary(&self) -> Summary {
        self.summary
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckResult> {
        self.results.iter().filter(|r| r.outcome.is_fail())
    }

    /// No failures; with `fail_on_skip`, no skips either.
    pub fn is_success(&self, fail_on_skip: bool) -> bool {
        self.summary.failed == 0 && !(fail_on_skip && self.summary.skipped > 0)
    }

    /// One line per check, reasons indented below, then a summary line.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for r in &self.results {
            let _ = writeln!(out, "{:<8}{}", r.outcome.label(), r.id);
            if let Some(reason) = r.outcome.reason() {
                let _ = writeln!(out, "        {reason}");
            }
        }
        let s = self.summary;
        let _ = writeln!(
            out,
            "==== {} passed, {} failed, {} skipped in {:.2}s ====",
            s.passed,
            s.failed,
            s.skipped,
            self.elapsed_ms as f64 / 1000.0
        );
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
