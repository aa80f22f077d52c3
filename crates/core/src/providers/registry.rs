use tracing::warn;

use crate::models::settings::{ProviderKind, Settings};

use super::alphavantage::AlphaVantageProvider;
use super::fixed::FixedPriceProvider;
#[cfg(not(target_arch = "wasm32"))]
use super::yahoo_finance::YahooFinanceProvider;
use super::traits::PriceProvider;

/// Settings key holding the Alpha Vantage API key.
pub const ALPHAVANTAGE_KEY: &str = "alphavantage";

/// Ordered list of quote providers.
///
/// Lookups try providers in registration order, so the first registered is
/// the primary source and the rest are fallbacks.
pub struct PriceProviderRegistry {
    providers: Vec<Box<dyn PriceProvider>>,
}

impl PriceProviderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry for the provider selection in `settings`.
    ///
    /// Providers that cannot be built (missing API key, connector failure)
    /// are skipped with a warning; the registry may end up empty.
    pub fn new_with_defaults(settings: &Settings) -> Self {
        let mut registry = Self::new();
        let alphavantage_key = settings.api_keys.get(ALPHAVANTAGE_KEY);

        match settings.provider {
            ProviderKind::Offline => {
                registry.register(Box::new(FixedPriceProvider::with_defaults()));
            }
            ProviderKind::YahooFinance => registry.register_yahoo(),
            ProviderKind::AlphaVantage => match alphavantage_key {
                Some(key) => registry.register(Box::new(AlphaVantageProvider::new(key.clone()))),
                None => warn!("Alpha Vantage selected but no API key is configured"),
            },
            ProviderKind::Auto => {
                // Yahoo Finance — NO API key needed (primary)
                registry.register_yahoo();

                // Alpha Vantage — requires API key (fallback)
                if let Some(key) = alphavantage_key {
                    registry.register(Box::new(AlphaVantageProvider::new(key.clone())));
                }
            }
        }

        registry
    }

    /// Register a new price provider at the end of the fallback chain.
    pub fn register(&mut self, provider: Box<dyn PriceProvider>) {
        self.providers.push(provider);
    }

    /// All providers, in fallback order.
    pub fn providers(&self) -> Vec<&dyn PriceProvider> {
        self.providers.iter().map(|p| p.as_ref()).collect()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn register_yahoo(&mut self) {
        match YahooFinanceProvider::new() {
            Ok(yahoo) => self.register(Box::new(yahoo)),
            Err(e) => warn!("Yahoo Finance unavailable: {e}"),
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn register_yahoo(&mut self) {
        warn!("Yahoo Finance is not supported on this target");
    }
}

impl Default for PriceProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
