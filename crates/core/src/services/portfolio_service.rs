use crate::errors::CoreError;
use crate::models::holding::{canonical_ticker, Holding};
use crate::models::portfolio::Portfolio;

/// Adds and removes purchase lots.
///
/// Pure business logic: no I/O, no API calls.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Append a new lot. The ticker is canonicalized; invalid amounts are
    /// rejected and leave the portfolio untouched.
    pub fn add_holding(
        &self,
        portfolio: &mut Portfolio,
        ticker: &str,
        shares: f64,
        purchase_price: f64,
        purchase_date: &str,
    ) -> Result<(), CoreError> {
        let holding = Holding::new(ticker, shares, purchase_price, purchase_date)?;
        portfolio.holdings.push(holding);
        Ok(())
    }

    /// Remove every lot of `ticker` (exact match after canonicalization).
    /// Returns how many lots were removed; 0 when the ticker is not held.
    pub fn remove_ticker(&self, portfolio: &mut Portfolio, ticker: &str) -> usize {
        let ticker = canonical_ticker(ticker);
        let before = portfolio.holdings.len();
        portfolio.holdings.retain(|h| h.ticker != ticker);
        before - portfolio.holdings.len()
    }

    /// All lots of a ticker (case-insensitive), in insertion order.
    pub fn get_holdings_for<'a>(&self, portfolio: &'a Portfolio, ticker: &str) -> Vec<&'a Holding> {
        portfolio
            .holdings
            .iter()
            .filter(|h| h.matches(ticker))
            .collect()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
