//! CLI argument definitions.
//!
//! Without a subcommand the interactive menu runs. The subcommands perform a
//! single action and exit, which is handy for scripts.
//!
//! # Examples
//!
//! ```bash
//! # Interactive menu
//! portfolio-tracker
//!
//! # Record a purchase and analyze with the offline price table
//! portfolio-tracker add aapl 10 150.25 --date 2024-01-02
//! portfolio-tracker --provider offline analyze
//!
//! # JSON report for other tools
//! portfolio-tracker analyze --format json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use portfolio_tracker_core::models::settings::{ProviderKind, Settings, DEFAULT_DATA_FILE};
use portfolio_tracker_core::providers::registry::ALPHAVANTAGE_KEY;

/// Track stock and crypto purchases and see profit/loss at current prices.
#[derive(Debug, Parser)]
#[command(name = "portfolio-tracker", author, version, about)]
pub struct Cli {
    /// JSON file holding the purchase lots.
    #[arg(long, global = true, env = "PORTFOLIO_DATA_FILE", default_value = DEFAULT_DATA_FILE)]
    pub data_file: PathBuf,

    /// Where current prices come from.
    ///
    /// - auto: Yahoo Finance, then Alpha Vantage if a key is set
    /// - offline: built-in sample prices, no network
    #[arg(long, global = true, value_enum, default_value_t = ProviderArg::Auto)]
    pub provider: ProviderArg,

    /// Alpha Vantage API key.
    #[arg(long, global = true, env = "ALPHAVANTAGE_API_KEY", hide_env_values = true)]
    pub alphavantage_key: Option<String>,

    /// Output format for reports and listings.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    Auto,
    Yahoo,
    AlphaVantage,
    Offline,
}

impl From<ProviderArg> for ProviderKind {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::Auto => ProviderKind::Auto,
            ProviderArg::Yahoo => ProviderKind::YahooFinance,
            ProviderArg::AlphaVantage => ProviderKind::AlphaVantage,
            ProviderArg::Offline => ProviderKind::Offline,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a purchase lot.
    Add(AddArgs),
    /// Remove every lot of a ticker.
    Remove {
        ticker: String,
    },
    /// Show all lots.
    List,
    /// Fetch current prices and show profit/loss.
    Analyze,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Ticker symbol (case-insensitive).
    pub ticker: String,

    /// Number of shares bought.
    pub shares: f64,

    /// Price paid per share.
    pub price: f64,

    /// Purchase date, stored as given. Defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

impl Cli {
    /// Core settings derived from the parsed arguments.
    pub fn settings(&self) -> Settings {
        let mut settings = Settings::new(self.data_file.clone());
        settings.provider = self.provider.into();
        if let Some(key) = self.alphavantage_key.as_ref().filter(|k| !k.trim().is_empty()) {
            settings
                .api_keys
                .insert(ALPHAVANTAGE_KEY.to_string(), key.trim().to_string());
        }
        settings
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
