pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    analytics::PortfolioReport, holding::Holding, portfolio::Portfolio, settings::Settings,
};
use providers::registry::PriceProviderRegistry;
use services::{
    analytics_service::AnalyticsService, portfolio_service::PortfolioService,
    price_service::PriceService,
};
use storage::manager::StorageManager;
use tracing::warn;

use errors::CoreError;

/// Result of a mutation that is saved to disk right away.
///
/// The in-memory change is kept even when saving fails; `save_error` then
/// holds the failure and the tracker reports unsaved changes until a later
/// `save()` succeeds.
#[derive(Debug)]
#[must_use]
pub struct Mutation<T> {
    pub value: T,
    pub save_error: Option<CoreError>,
}

impl<T> Mutation<T> {
    pub fn is_saved(&self) -> bool {
        self.save_error.is_none()
    }

    /// The value, or the save failure.
    pub fn into_result(self) -> Result<T, CoreError> {
        match self.save_error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }
}

/// Main entry point for the Portfolio Tracker core library.
/// Holds the holdings, the data file location, and all services needed to operate on them.
#[must_use]
pub struct PortfolioTracker {
    portfolio: Portfolio,
    settings: Settings,
    portfolio_service: PortfolioService,
    price_service: PriceService,
    analytics_service: AnalyticsService,
    /// Tracks whether any mutation has not reached the data file yet.
    dirty: bool,
}

impl std::fmt::Debug for PortfolioTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioTracker")
            .field("holdings", &self.portfolio.len())
            .field("data_file", &self.settings.data_file)
            .field("providers", &self.price_service.get_provider_names())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl PortfolioTracker {
    /// Open the data file named in `settings`, with the providers it selects.
    ///
    /// Never fails: a missing file gives an empty portfolio, and an unreadable
    /// or corrupt one gives an empty portfolio plus the error as a warning.
    pub fn open(settings: Settings) -> (Self, Option<CoreError>) {
        let registry = PriceProviderRegistry::new_with_defaults(&settings);
        Self::open_with_registry(settings, registry)
    }

    /// Like [`open`](Self::open), but with a caller-supplied provider chain.
    pub fn open_with_registry(
        settings: Settings,
        registry: PriceProviderRegistry,
    ) -> (Self, Option<CoreError>) {
        let (portfolio, warning) = match StorageManager::load_from_file(&settings.data_file) {
            Ok(Some(portfolio)) => (portfolio, None),
            Ok(None) => (Portfolio::new(), None),
            Err(e) => {
                warn!(
                    "Could not load {}, starting with an empty portfolio: {e}",
                    settings.data_file.display()
                );
                (Portfolio::new(), Some(e))
            }
        };
        (Self::build(portfolio, settings, registry), warning)
    }

    /// Wrap an in-memory portfolio without reading the data file.
    pub fn from_portfolio(
        portfolio: Portfolio,
        settings: Settings,
        registry: PriceProviderRegistry,
    ) -> Self {
        Self::build(portfolio, settings, registry)
    }

    /// Write all holdings to the data file. Clears the unsaved-changes flag on success.
    pub fn save(&mut self) -> Result<(), CoreError> {
        StorageManager::save_to_file(&self.portfolio, &self.settings.data_file)?;
        self.dirty = false;
        Ok(())
    }

    // ── Holding Management ──────────────────────────────────────────

    /// Add a purchase lot and save.
    ///
    /// Returns `Err` only for invalid input, in which case nothing changes.
    pub fn add_holding(
        &mut self,
        ticker: &str,
        shares: f64,
        purchase_price: f64,
        purchase_date: &str,
    ) -> Result<Mutation<()>, CoreError> {
        self.portfolio_service.add_holding(
            &mut self.portfolio,
            ticker,
            shares,
            purchase_price,
            purchase_date,
        )?;
        self.dirty = true;
        Ok(self.persist(()))
    }

    /// Remove every lot of a ticker. Saves only when something was removed.
    pub fn remove_ticker(&mut self, ticker: &str) -> Mutation<usize> {
        let removed = self
            .portfolio_service
            .remove_ticker(&mut self.portfolio, ticker);
        if removed == 0 {
            return Mutation {
                value: 0,
                save_error: None,
            };
        }
        self.dirty = true;
        self.persist(removed)
    }

    /// All lots, in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.portfolio.holdings
    }

    /// All lots of one ticker (case-insensitive).
    #[must_use]
    pub fn holdings_for(&self, ticker: &str) -> Vec<&Holding> {
        self.portfolio_service
            .get_holdings_for(&self.portfolio, ticker)
    }

    /// Distinct tickers in order of first appearance.
    #[must_use]
    pub fn tickers(&self) -> Vec<&str> {
        self.portfolio.tickers()
    }

    #[must_use]
    pub fn holding_count(&self) -> usize {
        self.portfolio.len()
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Check if there are changes not yet written to the data file.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Analysis ────────────────────────────────────────────────────

    /// Price every ticker and compute profit/loss.
    /// Returns `None` when there are no holdings.
    pub async fn analyze(&self) -> Option<PortfolioReport> {
        self.analytics_service
            .analyze(&self.portfolio, &self.price_service)
            .await
    }

    /// Names of the configured quote providers, in fallback order.
    #[must_use]
    pub fn get_provider_names(&self) -> Vec<String> {
        self.price_service.get_provider_names()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn persist<T>(&mut self, value: T) -> Mutation<T> {
        let save_error = match self.save() {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    "Failed to save {}: {e}",
                    self.settings.data_file.display()
                );
                Some(e)
            }
        };
        Mutation { value, save_error }
    }

    fn build(portfolio: Portfolio, settings: Settings, registry: PriceProviderRegistry) -> Self {
        Self {
            portfolio,
            settings,
            portfolio_service: PortfolioService::new(),
            price_service: PriceService::new(registry),
            analytics_service: AnalyticsService::new(),
            dirty: false,
        }
    }
}
