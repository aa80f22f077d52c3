use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Default data file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "portfolio_data.json";

/// Which quote source(s) to query for current prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Yahoo Finance first, then Alpha Vantage when an API key is configured
    #[default]
    Auto,
    YahooFinance,
    AlphaVantage,
    /// Fixed built-in price table, no network access
    Offline,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderKind::Auto => write!(f, "auto"),
            ProviderKind::YahooFinance => write!(f, "yahoo"),
            ProviderKind::AlphaVantage => write!(f, "alpha-vantage"),
            ProviderKind::Offline => write!(f, "offline"),
        }
    }
}

/// Runtime configuration handed to the tracker and the provider registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Where the holdings are persisted
    pub data_file: PathBuf,

    /// Quote source selection
    pub provider: ProviderKind,

    /// Optional API keys for providers that require them.
    /// Keys: provider name (e.g., "alphavantage").
    pub api_keys: HashMap<String, String>,
}

impl Settings {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            provider: ProviderKind::default(),
            api_keys: HashMap::new(),
        }
    }
}
