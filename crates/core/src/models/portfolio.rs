use serde::{Deserialize, Serialize};

use super::holding::{canonical_ticker, Holding};

/// The main data container: every purchase lot, in the order it was added.
///
/// Serialized as a bare JSON array of holdings so existing data files
/// (`[{"ticker": ..., "shares": ..., ...}]`) load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Portfolio {
    pub holdings: Vec<Holding>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    /// Distinct tickers in order of first appearance.
    pub fn tickers(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for holding in &self.holdings {
            if !seen.contains(&holding.ticker.as_str()) {
                seen.push(&holding.ticker);
            }
        }
        seen
    }

    /// Uppercase every ticker in place. Applied after reading a data file
    /// that may have been edited by hand.
    pub fn canonicalize(&mut self) {
        for holding in &mut self.holdings {
            holding.ticker = canonical_ticker(&holding.ticker);
        }
    }
}

impl From<Vec<Holding>> for Portfolio {
    fn from(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }
}
