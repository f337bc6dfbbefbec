//! Artifact layout configuration.
//!
//! Stored as TOML (`forecastlab.toml` at the project root). Every field has a
//! default matching the notebooks' output layout, so a missing file or a
//! partial file both work:
//!
//! ```toml
//! data_dir = "data/processed"
//! tickers = ["TSLA", "BND", "SPY"]
//!
//! [[task2.forecasts]]
//! file = "arima_forecast.csv"
//! column = "arima_forecast"
//! ```

use forecastlab_core::data::price_series::OHLCV_COLUMNS;
use forecastlab_core::Ticker;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up at the project root when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "forecastlab.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid layout: {0}")]
    Invalid(String),
}

/// Where the notebooks put their outputs, and what each output must contain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutConfig {
    /// Directory holding CSV and JSON outputs, relative to the project root.
    pub data_dir: PathBuf,
    /// Directory holding saved figures, relative to the project root.
    pub image_dir: PathBuf,
    pub tickers: Vec<Ticker>,
    /// Columns every cleaned price series must carry.
    pub price_columns: Vec<String>,
    pub task1: Task1Config,
    pub task2: Task2Config,
}

/// EDA notebook outputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Task1Config {
    pub stats_file: String,
    pub required_keys: Vec<String>,
    pub figures: Vec<String>,
}

/// Forecasting notebook outputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Task2Config {
    pub stats_file: String,
    pub required_keys: Vec<String>,
    /// Key of the per-model metrics object inside the stats file.
    pub metrics_key: String,
    /// Each name must appear as a substring of some metrics key.
    pub metric_models: Vec<String>,
    pub figures: Vec<String>,
    pub forecasts: Vec<ForecastFile>,
}

/// A forecast CSV and the column holding its predicted prices.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastFile {
    pub file: String,
    pub column: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/processed"),
            image_dir: PathBuf::from("notebooks/images"),
            tickers: Ticker::defaults(),
            price_columns: strings(&OHLCV_COLUMNS),
            task1: Task1Config::default(),
            task2: Task2Config::default(),
        }
    }
}

impl Default for Task1Config {
    fn default() -> Self {
        Self {
            stats_file: "task1_stats.json".into(),
            required_keys: strings(&["adf_results", "risk_metrics", "return_stats", "row_counts"]),
            figures: strings(&[
                "fig1_closing_prices.png",
                "fig2_daily_returns.png",
                "fig3_tsla_rolling_stats.png",
                "fig4_return_distributions.png",
                "fig5_correlation_heatmap.png",
                "fig6_tsla_var.png",
            ]),
        }
    }
}

impl Default for Task2Config {
    fn default() -> Self {
        Self {
            stats_file: "task2_stats.json".into(),
            required_keys: strings(&["arima_order", "lstm_window", "metrics", "best_model_by_rmse"]),
            metrics_key: "metrics".into(),
            metric_models: strings(&["ARIMA", "LSTM"]),
            figures: strings(&[
                "t2_fig1_train_test_split.png",
                "t2_fig2_acf_pacf.png",
                "t2_fig3_arima_forecast.png",
                "t2_fig4_lstm_loss.png",
                "t2_fig5_lstm_forecast.png",
                "t2_fig6_model_comparison.png",
            ]),
            forecasts: vec![
                ForecastFile {
                    file: "arima_forecast.csv".into(),
                    column: "arima_forecast".into(),
                },
                ForecastFile {
                    file: "lstm_forecast.csv".into(),
                    column: "lstm_forecast".into(),
                },
            ],
        }
    }
}

impl LayoutConfig {
    /// Load and validate a layout from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a layout from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Resolve the layout for a project root.
    ///
    /// An explicit path must exist. Otherwise `{root}/forecastlab.toml` is used
    /// when present, and the default layout when not.
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let candidate = root.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using project layout config");
            Self::from_file(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tickers.is_empty() {
            return Err(ConfigError::Invalid("tickers must not be empty".into()));
        }
        let mut seen = HashSet::new();
        if let Some(dup) = self.tickers.iter().find(|t| !seen.insert(t.as_str())) {
            return Err(ConfigError::Invalid(format!("duplicate ticker '{dup}'")));
        }
        for (task, stats_file) in [
            ("task1", &self.task1.stats_file),
            ("task2", &self.task2.stats_file),
        ] {
            if stats_file.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{task}.stats_file must not be empty")));
            }
        }
        let mut forecast_files = HashSet::new();
        for forecast in &self.task2.forecasts {
            if forecast.file.trim().is_empty() || forecast.column.trim().is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "forecast entry needs both file and column (file = '{}', column = '{}')",
                    forecast.file, forecast.column
                )));
            }
            if !forecast_files.insert(forecast.file.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate forecast file '{}'",
                    forecast.file
                )));
            }
        }
        if self.task2.metrics_key.trim().is_empty() && !self.task2.metric_models.is_empty() {
            return Err(ConfigError::Invalid(
                "task2.metric_models is set but task2.metrics_key is empty".into(),
            ));
        }
        let mut figures = HashSet::new();
        for name in self.task1.figures.iter().chain(&self.task2.figures) {
            if !figures.insert(name.as_str()) {
                return Err(ConfigError::Invalid(format!("duplicate figure '{name}'")));
            }
        }
        Ok(())
    }

    /// Path of the cleaned price series for a ticker, relative to the root.
    pub fn clean_csv(&self, ticker: &Ticker) -> PathBuf {
        self.data_dir.join(ticker.clean_csv_name())
    }

    pub fn data_file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn figure(&self, name: &str) -> PathBuf {
        self.image_dir.join(name)
    }
}
