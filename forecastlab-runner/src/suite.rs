//! Suite runner: evaluate selected checks against a project root.
//!
//! Checks are independent and read-only, so parallel mode simply fans them
//! out over the rayon pool. Results always come back in catalog order.

use crate::check::Check;
use crate::outcome::CheckResult;
use crate::report::SuiteReport;
use rayon::prelude::*;
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// How to run a suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub parallel: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Run `checks` against `root` and collect a report.
pub fn run_checks(root: &Path, checks: &[&Check], opts: &RunOptions) -> SuiteReport {
    let started = Instant::now();

    let results: Vec<CheckResult> = if opts.parallel {
        checks.par_iter().map(|check| check.run(root)).collect()
    } else {
        checks.iter().map(|check| check.run(root)).collect()
    };

    let report = SuiteReport::new(root, results, started.elapsed());
    let summary = report.summary();
    info!(
        root = %root.display(),
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        "suite finished"
    );
    report
}
