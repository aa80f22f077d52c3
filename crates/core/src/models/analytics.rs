use serde::{Deserialize, Serialize};

/// Whether a position is up or down. Break-even counts as a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PnlStatus {
    Gain,
    Loss,
}

impl PnlStatus {
    pub fn from_pnl(pnl: f64) -> Self {
        if pnl >= 0.0 {
            PnlStatus::Gain
        } else {
            PnlStatus::Loss
        }
    }
}

impl std::fmt::Display for PnlStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PnlStatus::Gain => write!(f, "Gain"),
            PnlStatus::Loss => write!(f, "Loss"),
        }
    }
}

/// Running totals for one ticker, accumulated across its priced lots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerSummary {
    pub ticker: String,

    /// Sum of shares across all lots
    pub total_shares: f64,

    /// Sum of `shares × purchase_price` across all lots
    pub total_investment: f64,

    /// Price fetched once for this ticker during the analysis run
    pub current_price: f64,
}

/// One report line per ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerReport {
    pub ticker: String,
    pub total_shares: f64,

    /// Weighted average cost per share (total_investment / total_shares)
    pub avg_cost: f64,

    pub current_price: f64,

    /// total_shares × current_price
    pub current_value: f64,

    pub total_investment: f64,

    /// current_value - total_investment
    pub pnl: f64,

    /// pnl / total_investment × 100, or 0 when nothing was invested
    pub pct_change: f64,

    pub status: PnlStatus,
}

/// Whole-portfolio totals over every priced ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub current_value: f64,
    pub total_investment: f64,
    pub pnl: f64,
    pub pct_change: f64,
    pub status: PnlStatus,
}

/// A ticker left out of the report because no price could be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnavailableTicker {
    pub ticker: String,
    pub reason: String,
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    /// Per-ticker lines, in order of first appearance in the portfolio
    pub tickers: Vec<TickerReport>,

    pub totals: PortfolioTotals,

    /// Tickers skipped for lack of a price, in order of first appearance
    pub unavailable: Vec<UnavailableTicker>,
}
