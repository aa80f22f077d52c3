use async_trait::async_trait;

use crate::errors::CoreError;

/// Trait abstraction for all quote providers.
///
/// Each source (Yahoo Finance, Alpha Vantage, the offline table) implements
/// this trait, so a broken or retired API is replaced by swapping one
/// implementation. Failures are returned as typed `CoreError`s; turning them
/// into an "unavailable" price is the caller's job.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait PriceProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Get the latest price per share for a ticker symbol.
    async fn get_current_price(&self, symbol: &str) -> Result<f64, CoreError>;
}
