use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use super::traits::PriceProvider;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER: &str = "Alpha Vantage";

/// Alpha Vantage API provider for stock/equity prices.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: API key (set via settings as "alphavantage").
/// - **Coverage**: 100k+ global equity symbols.
///
/// Only the `GLOBAL_QUOTE` endpoint is used. Quotes are in the stock's
/// native currency (typically USD).
pub struct AlphaVantageProvider {
    client: Client,
    api_key: String,
}

impl AlphaVantageProvider {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Alpha Vantage API response types ────────────────────────────────

#[derive(Deserialize)]
struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    global_quote: Option<GlobalQuote>,

    #[serde(rename = "Error Message")]
    error_message: Option<String>,

    /// Sent instead of data when the per-minute limit is hit
    #[serde(rename = "Note")]
    note: Option<String>,

    /// Sent instead of data when the daily limit is hit
    #[serde(rename = "Information")]
    information: Option<String>,
}

#[derive(Deserialize)]
struct GlobalQuote {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,

    #[serde(rename = "05. price")]
    price: Option<String>,
}

/// Classify a `GLOBAL_QUOTE` response body into a price or a typed failure.
///
/// - `"Error Message"` → unknown symbol
/// - `"Note"` / `"Information"` → rate limited
/// - missing or empty `"Global Quote"` → unknown symbol
/// - missing or unparsable `"05. price"` → malformed quote
pub fn parse_global_quote(symbol: &str, body: &str) -> Result<f64, CoreError> {
    let resp: GlobalQuoteResponse =
        serde_json::from_str(body).map_err(|e| CoreError::MalformedQuote {
            provider: PROVIDER.into(),
            symbol: symbol.to_string(),
            message: format!("Response is not valid JSON: {e}"),
        })?;

    if resp.error_message.is_some() {
        return Err(CoreError::SymbolNotFound {
            provider: PROVIDER.into(),
            symbol: symbol.to_string(),
        });
    }

    if let Some(message) = resp.note.or(resp.information) {
        return Err(CoreError::RateLimited {
            provider: PROVIDER.into(),
            message,
        });
    }

    let quote = match resp.global_quote {
        Some(q) if q.symbol.is_some() || q.price.is_some() => q,
        _ => {
            return Err(CoreError::SymbolNotFound {
                provider: PROVIDER.into(),
                symbol: symbol.to_string(),
            })
        }
    };

    let price_str = quote.price.ok_or_else(|| CoreError::MalformedQuote {
        provider: PROVIDER.into(),
        symbol: symbol.to_string(),
        message: "Quote has no price field".into(),
    })?;

    price_str
        .trim()
        .parse()
        .map_err(|e| CoreError::MalformedQuote {
            provider: PROVIDER.into(),
            symbol: symbol.to_string(),
            message: format!("Invalid price format {price_str:?}: {e}"),
        })
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl PriceProvider for AlphaVantageProvider {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn get_current_price(&self, symbol: &str) -> Result<f64, CoreError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", &symbol.to_uppercase()),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?;

        match resp.status() {
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(CoreError::RateLimited {
                    provider: PROVIDER.into(),
                    message: "HTTP 429 Too Many Requests".into(),
                })
            }
            status if !status.is_success() => {
                return Err(CoreError::Api {
                    provider: PROVIDER.into(),
                    message: format!("Unexpected HTTP status {status} for {symbol}"),
                })
            }
            _ => {}
        }

        let body = resp.text().await?;
        parse_global_quote(symbol, &body)
    }
}
