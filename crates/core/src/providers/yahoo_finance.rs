use async_trait::async_trait;

use crate::errors::CoreError;
use super::traits::PriceProvider;

const PROVIDER: &str = "Yahoo Finance";

/// Yahoo Finance API provider for stock/equity prices.
///
/// - **Free**: No API key required.
/// - **No strict rate limits** (unofficial public API).
/// - **Coverage**: Global equities, ETFs, indices, mutual funds, major crypto pairs.
///
/// Uses the `yahoo_finance_api` crate which wraps Yahoo Finance's
/// public endpoints. The current price is the close of the latest daily bar.
///
/// **Note**: Not WASM-compatible (uses native reqwest/tokio).
pub struct YahooFinanceProvider {
    connector: yahoo_finance_api::YahooConnector,
}

impl YahooFinanceProvider {
    pub fn new() -> Result<Self, CoreError> {
        let connector = yahoo_finance_api::YahooConnector::new()
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to create connector: {e}"),
            })?;
        Ok(Self { connector })
    }
}

/// Map a connector error onto the error taxonomy.
///
/// The connector reports most failures as text, so this goes by the message.
fn classify(symbol: &str, err: yahoo_finance_api::YahooError) -> CoreError {
    let message = err.to_string();
    let lower = message.to_lowercase();

    if lower.contains("429") || lower.contains("too many requests") {
        CoreError::RateLimited {
            provider: PROVIDER.into(),
            message,
        }
    } else if lower.contains("404")
        || lower.contains("not found")
        || lower.contains("empty")
        || lower.contains("no quotes")
        || lower.contains("no result")
    {
        CoreError::SymbolNotFound {
            provider: PROVIDER.into(),
            symbol: symbol.to_string(),
        }
    } else if lower.contains("connection") || lower.contains("fetch") {
        CoreError::Network(message)
    } else {
        CoreError::MalformedQuote {
            provider: PROVIDER.into(),
            symbol: symbol.to_string(),
            message,
        }
    }
}

#[async_trait]
impl PriceProvider for YahooFinanceProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn get_current_price(&self, symbol: &str) -> Result<f64, CoreError> {
        let resp = self
            .connector
            .get_latest_quotes(symbol, "1d")
            .await
            .map_err(|e| classify(symbol, e))?;

        let quote = resp.last_quote().map_err(|e| classify(symbol, e))?;

        Ok(quote.close)
    }
}
