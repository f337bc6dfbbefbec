//! Ticker symbols for the analysed assets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The tickers the notebooks download and clean by default.
pub const DEFAULT_TICKERS: [&str; 3] = ["TSLA", "BND", "SPY"];

/// A validated ticker symbol (upper-case ASCII letters, digits, `.` or `-`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TickerError {
    #[error("ticker symbol is empty")]
    Empty,

    #[error("invalid character {ch:?} in ticker '{symbol}'")]
    InvalidChar { symbol: String, ch: char },
}

impl Ticker {
    /// Parse a symbol, normalizing to upper case.
    pub fn new(symbol: &str) -> Result<Self, TickerError> {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.is_empty() {
            return Err(TickerError::Empty);
        }
        if let Some(ch) = symbol
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '.' || *c == '-'))
        {
            return Err(TickerError::InvalidChar { symbol, ch });
        }
        Ok(Self(symbol))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the cleaned price series: `{TICKER}_clean.csv`.
    pub fn clean_csv_name(&self) -> String {
        format!("{}_clean.csv", self.0)
    }

    /// TSLA, BND and SPY.
    pub fn defaults() -> Vec<Ticker> {
        DEFAULT_TICKERS
            .iter()
            .map(|s| Ticker(s.to_string()))
            .collect()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TickerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let t = Ticker::new(" tsla ").unwrap();
        assert_eq!(t.as_str(), "TSLA");
        assert_eq!(t.clean_csv_name(), "TSLA_clean.csv");
    }

    #[test]
    fn test_rejects_empty_and_bad_chars() {
        assert_eq!(Ticker::new("  "), Err(TickerError::Empty));
        assert!(matches!(
            Ticker::new("SP Y"),
            Err(TickerError::InvalidChar { ch: ' ', .. })
        ));
        assert!(Ticker::new("../etc").is_err());
    }

    #[test]
    fn test_accepts_class_shares() {
        assert_eq!(Ticker::new("brk.b").unwrap().as_str(), "BRK.B");
    }

    #[test]
    fn test_defaults_are_three_assets() {
        let names: Vec<String> = Ticker::defaults().iter().map(|t| t.to_string()).collect();
        assert_eq!(names, vec!["TSLA", "BND", "SPY"]);
    }

    #[test]
    fn test_serde_goes_through_validation() {
        let t: Ticker = serde_json::from_str("\"spy\"").unwrap();
        assert_eq!(t.as_str(), "SPY");
        assert!(serde_json::from_str::<Ticker>("\"\"").is_err());
    }
}
