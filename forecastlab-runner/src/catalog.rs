//! The check catalog: every check the layout implies, in a stable order.

use crate::check::{Check, CheckKind};
use crate::config::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Which notebook produced the artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Task {
    /// Data extraction, cleaning and EDA.
    Task1,
    /// ARIMA / LSTM forecasting.
    Task2,
}

impl Task {
    pub const ALL: [Task; 2] = [Task::Task1, Task::Task2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Task::Task1 => "task1",
            Task::Task2 => "task2",
        }
    }

    /// The notebook that writes this task's artifacts.
    pub fn notebook(&self) -> &'static str {
        match self {
            Task::Task1 => "task1_eda.ipynb",
            Task::Task2 => "task2_forecasting.ipynb",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Task {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "task1" | "1" => Ok(Task::Task1),
            "task2" | "2" => Ok(Task::Task2),
            other => Err(format!("unknown task '{other}' (expected task1 or task2)")),
        }
    }
}

/// Ordered list of checks built from a layout.
#[derive(Debug, Clone)]
pub struct Catalog {
    checks: Vec<Check>,
}

impl Catalog {
    pub fn from_config(cfg: &LayoutConfig) -> Self {
        let mut checks = Vec::new();
        push_task1(&mut checks, cfg);
        push_task2(&mut checks, cfg);
        Self { checks }
    }

    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Checks for one task (or all), whose id contains `filter` (if given).
    pub fn select(&self, task: Option<Task>, filter: Option<&str>) -> Vec<&Check> {
        self.checks
            .iter()
            .filter(|c| task.map_or(true, |t| c.task == t))
            .filter(|c| filter.map_or(true, |f| c.id.contains(f)))
            .collect()
    }

    /// Distinct artifact paths, in first-use order.
    pub fn artifacts(&self) -> Vec<&Path> {
        let mut seen = HashSet::new();
        self.checks
            .iter()
            .map(|c| c.artifact.as_path())
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

fn push_task1(checks: &mut Vec<Check>, cfg: &LayoutConfig) {
    let task = Task::Task1;

    for ticker in &cfg.tickers {
        let path = cfg.clean_csv(ticker);
        checks.push(Check::new(
            format!("task1::clean_csv_exists[{ticker}]"),
            task,
            &path,
            CheckKind::FileExists,
        ));
        checks.push(Check::new(
            format!("task1::clean_csv_no_nulls[{ticker}]"),
            task,
            &path,
            CheckKind::PriceSeriesNoNulls,
        ));
        checks.push(Check::new(
            format!("task1::clean_csv_has_required_columns[{ticker}]"),
            task,
            &path,
            CheckKind::PriceSeriesColumns {
                columns: cfg.price_columns.clone(),
            },
        ));
    }

    let stats = cfg.data_file(&cfg.task1.stats_file);
    checks.push(Check::new(
        "task1::stats_json_exists",
        task,
        &stats,
        CheckKind::FileExists,
    ));
    checks.push(Check::new(
        "task1::stats_json_has_required_keys",
        task,
        &stats,
        CheckKind::SummaryKeys {
            keys: cfg.task1.required_keys.clone(),
        },
    ));

    for figure in &cfg.task1.figures {
        checks.push(Check::new(
            format!("task1::figure_exists[{figure}]"),
            task,
            cfg.figure(figure),
            CheckKind::FileExists,
        ));
    }
}

fn push_task2(checks: &mut Vec<Check>, cfg: &LayoutConfig) {
    let task = Task::Task2;

    for forecast in &cfg.task2.forecasts {
        let path = cfg.data_file(&forecast.file);
        let name = &forecast.file;
        checks.push(Check::new(
            format!("task2::forecast_csv_exists[{name}]"),
            task,
            &path,
            CheckKind::FileExists,
        ));
        checks.push(Check::new(
            format!("task2::forecast_csv_no_nulls[{name}]"),
            task,
            &path,
            CheckKind::ForecastNoNulls,
        ));
        checks.push(Check::new(
            format!("task2::forecast_csv_positive_prices[{name}]"),
            task,
            &path,
            CheckKind::ForecastPositive {
                column: forecast.column.clone(),
            },
        ));
    }

    let stats = cfg.data_file(&cfg.task2.stats_file);
    checks.push(Check::new(
        "task2::stats_json_exists",
        task,
        &stats,
        CheckKind::FileExists,
    ));
    checks.push(Check::new(
        "task2::stats_json_has_required_keys",
        task,
        &stats,
        CheckKind::SummaryKeys {
            keys: cfg.task2.required_keys.clone(),
        },
    ));
    if !cfg.task2.metric_models.is_empty() {
        checks.push(Check::new(
            "task2::stats_metrics_have_both_models",
            task,
            &stats,
            CheckKind::SummaryModels {
                field: cfg.task2.metrics_key.clone(),
                models: cfg.task2.metric_models.clone(),
            },
        ));
    }

    for figure in &cfg.task2.figures {
        checks.push(Check::new(
            format!("task2::figure_exists[{figure}]"),
            task,
            cfg.figure(figure),
            CheckKind::FileExists,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::from_config(&LayoutConfig::default());
        // 3 tickers x 3 + 2 stats + 6 figures
        assert_eq!(catalog.select(Some(Task::Task1), None).len(), 17);
        // 2 forecasts x 3 + 3 stats + 6 figures
        assert_eq!(catalog.select(Some(Task::Task2), None).len(), 15);
        assert_eq!(catalog.len(), 32);
    }

    #[test]
    fn test_ids_are_unique() {
        let catalog = Catalog::from_config(&LayoutConfig::default());
        let mut ids = HashSet::new();
        for check in catalog.checks() {
            assert!(ids.insert(check.id.as_str()), "duplicate id {}", check.id);
        }
    }

    #[test]
    fn test_parametrized_ids_and_artifacts() {
        let catalog = Catalog::from_config(&LayoutConfig::default());
        let check = catalog.get("task1::clean_csv_no_nulls[BND]").unwrap();
        assert_eq!(check.artifact, Path::new("data/processed/BND_clean.csv"));
        assert_eq!(check.kind, CheckKind::PriceSeriesNoNulls);

        let check = catalog
            .get("task2::forecast_csv_positive_prices[lstm_forecast.csv]")
            .unwrap();
        assert_eq!(
            check.kind,
            CheckKind::ForecastPositive {
                column: "lstm_forecast".into()
            }
        );

        let check = catalog.get("task2::figure_exists[t2_fig4_lstm_loss.png]").unwrap();
        assert_eq!(check.artifact, Path::new("notebooks/images/t2_fig4_lstm_loss.png"));
    }

    #[test]
    fn test_select_by_filter() {
        let catalog = Catalog::from_config(&LayoutConfig::default());
        let tsla: Vec<&str> = catalog
            .select(None, Some("[TSLA]"))
            .iter()
            .map(|c| c.id.as_str())
            .collect();
        assert_eq!(
            tsla,
            vec![
                "task1::clean_csv_exists[TSLA]",
                "task1::clean_csv_no_nulls[TSLA]",
                "task1::clean_csv_has_required_columns[TSLA]",
            ]
        );
        assert!(catalog.select(Some(Task::Task1), Some("forecast")).is_empty());
    }

    #[test]
    fn test_artifacts_are_deduplicated() {
        let catalog = Catalog::from_config(&LayoutConfig::default());
        // 3 clean csvs + task1 stats + 6 figs + 2 forecasts + task2 stats + 6 figs
        assert_eq!(catalog.artifacts().len(), 19);
    }

    #[test]
    fn test_no_models_means_no_models_check() {
        let mut cfg = LayoutConfig::default();
        cfg.task2.metric_models.clear();
        let catalog = Catalog::from_config(&cfg);
        assert!(catalog.get("task2::stats_metrics_have_both_models").is_none());
    }

    #[test]
    fn test_task_parsing() {
        assert_eq!("task1".parse::<Task>(), Ok(Task::Task1));
        assert_eq!("TASK2".parse::<Task>(), Ok(Task::Task2));
        assert_eq!("2".parse::<Task>(), Ok(Task::Task2));
        assert!("task3".parse::<Task>().is_err());
        assert_eq!(Task::Task1.notebook(), "task1_eda.ipynb");
    }
}
