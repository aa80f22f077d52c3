use serde::{Deserialize, Serialize};

/// Outcome of asking the price oracle for a ticker's current price.
///
/// Every failure (unknown symbol, rate limit, network error, malformed
/// response) collapses into `Unavailable`, carrying a message for the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PriceLookup {
    Available(f64),
    Unavailable(String),
}

impl PriceLookup {
    /// The price, if one was obtained.
    pub fn price(&self) -> Option<f64> {
        match self {
            PriceLookup::Available(price) => Some(*price),
            PriceLookup::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, PriceLookup::Available(_))
    }
}
