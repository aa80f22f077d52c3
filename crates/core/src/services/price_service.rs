use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::holding::canonical_ticker;
use crate::models::price::PriceLookup;
use crate::providers::registry::PriceProviderRegistry;

/// The price oracle: current price for a ticker, or `Unavailable`.
///
/// Never returns an error. Every provider failure (unknown symbol, rate
/// limit, network, malformed response, invalid number) is logged and
/// collapsed into `PriceLookup::Unavailable` with the last failure's message.
///
/// This service keeps no cache of its own. Callers that need one price per
/// ticker per run (the analysis engine) cache results themselves.
pub struct PriceService {
    registry: PriceProviderRegistry,
}

impl PriceService {
    pub fn new(registry: PriceProviderRegistry) -> Self {
        Self { registry }
    }

    /// Check if at least one provider is configured.
    pub fn has_provider(&self) -> bool {
        !self.registry.is_empty()
    }

    /// Names of the configured providers, in fallback order.
    pub fn get_provider_names(&self) -> Vec<String> {
        self.registry.provider_names()
    }

    /// Fetch the current price of `ticker`.
    ///
    /// Tries providers in registration order and falls back to the next one
    /// on failure. Prices must be finite and non-negative.
    pub async fn fetch_price(&self, ticker: &str) -> PriceLookup {
        match self.try_fetch(&canonical_ticker(ticker)).await {
            Ok(price) => PriceLookup::Available(price),
            Err(e) => PriceLookup::Unavailable(e.to_string()),
        }
    }

    async fn try_fetch(&self, symbol: &str) -> Result<f64, CoreError> {
        let providers = self.registry.providers();
        if providers.is_empty() {
            warn!("No price provider configured, cannot price {symbol}");
            return Err(CoreError::NoProvider);
        }

        let mut last_error = None;

        for provider in &providers {
            match provider.get_current_price(symbol).await {
                Ok(price) => {
                    if !price.is_finite() || price < 0.0 {
                        warn!(
                            provider = provider.name(),
                            "Rejected invalid price for {symbol}: {price}"
                        );
                        last_error = Some(CoreError::MalformedQuote {
                            provider: provider.name().to_string(),
                            symbol: symbol.to_string(),
                            message: format!("Price {price} must be finite and non-negative"),
                        });
                        continue;
                    }
                    debug!(provider = provider.name(), "{symbol} = {price}");
                    return Ok(price);
                }
                Err(e) => {
                    warn!(provider = provider.name(), "Price lookup for {symbol} failed: {e}");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or(CoreError::NoProvider))
    }
}
