use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Canonical form of a ticker symbol: trimmed and uppercased.
pub fn canonical_ticker(ticker: &str) -> String {
    ticker.trim().to_uppercase()
}

/// A single purchase lot.
///
/// Several holdings may share a ticker (one per purchase). They are kept
/// separate in storage and only combined during analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, always uppercased (e.g., "AAPL", "BTC")
    pub ticker: String,

    /// Number of shares bought in this lot
    pub shares: f64,

    /// Price paid per share
    pub purchase_price: f64,

    /// Purchase date as entered by the user. Never parsed.
    pub purchase_date: String,
}

impl Holding {
    /// Build a holding with a canonicalized ticker, rejecting invalid amounts.
    pub fn new(
        ticker: &str,
        shares: f64,
        purchase_price: f64,
        purchase_date: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let ticker = canonical_ticker(ticker);
        if ticker.is_empty() {
            return Err(CoreError::ValidationError("Ticker must not be empty".into()));
        }
        if !shares.is_finite() || shares <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Shares must be a positive number (got {shares})"
            )));
        }
        if !purchase_price.is_finite() || purchase_price < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Purchase price must be zero or positive (got {purchase_price})"
            )));
        }

        Ok(Self {
            ticker,
            shares,
            purchase_price,
            purchase_date: purchase_date.into(),
        })
    }

    /// Amount paid for this lot (`shares × purchase_price`).
    pub fn cost(&self) -> f64 {
        self.shares * self.purchase_price
    }

    /// Case-insensitive ticker match.
    pub fn matches(&self, ticker: &str) -> bool {
        self.ticker == canonical_ticker(ticker)
    }
}
