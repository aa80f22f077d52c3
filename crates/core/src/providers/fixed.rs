use async_trait::async_trait;
use std::collections::HashMap;

use crate::errors::CoreError;
use crate::models::holding::canonical_ticker;
use super::traits::PriceProvider;

const PROVIDER: &str = "Offline";

/// Price used by the default table for symbols it does not list.
pub const DEFAULT_FALLBACK_PRICE: f64 = 100.0;

/// Offline provider answering from a fixed price table.
///
/// - **No network**: useful for demos, tests, and working without API access.
/// - Symbols missing from the table get the fallback price when one is set,
///   and fail with `SymbolNotFound` otherwise.
pub struct FixedPriceProvider {
    prices: HashMap<String, f64>,
    fallback: Option<f64>,
}

impl FixedPriceProvider {
    /// Empty table, no fallback: every lookup fails until prices are added.
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            fallback: None,
        }
    }

    /// Built-in sample prices with a 100.00 fallback for everything else.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_price("AAPL", 190.50)
            .with_price("TSLA", 240.50)
            .with_price("GOOG", 140.50)
            .with_price("BTC", 37_000.00)
            .with_price("ETH", 2_025.00)
            .with_fallback(DEFAULT_FALLBACK_PRICE)
    }

    pub fn with_price(mut self, symbol: &str, price: f64) -> Self {
        self.prices.insert(canonical_ticker(symbol), price);
        self
    }

    pub fn with_fallback(mut self, price: f64) -> Self {
        self.fallback = Some(price);
        self
    }
}

impl Default for FixedPriceProvider {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceProvider for FixedPriceProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn get_current_price(&self, symbol: &str) -> Result<f64, CoreError> {
        self.prices
            .get(&canonical_ticker(symbol))
            .copied()
            .or(self.fallback)
            .ok_or_else(|| CoreError::SymbolNotFound {
                provider: PROVIDER.into(),
                symbol: symbol.to_string(),
            })
    }
}
