use std::collections::HashMap;
use tracing::{debug, warn};

use crate::models::analytics::{
    PnlStatus, PortfolioReport, PortfolioTotals, TickerReport, TickerSummary, UnavailableTicker,
};
use crate::models::portfolio::Portfolio;
use crate::models::price::PriceLookup;
use crate::services::price_service::PriceService;

/// Computes profit/loss per ticker and for the whole portfolio.
///
/// Lots of the same ticker are merged into a weighted-average cost and
/// valued at a single current price. Each ticker is priced at most once per
/// run; a ticker whose price is unavailable is left out of every total.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a portfolio snapshot.
    ///
    /// Returns `None` for an empty portfolio without touching the oracle.
    /// Ticker lines follow the order in which tickers first appear.
    pub async fn analyze(
        &self,
        portfolio: &Portfolio,
        price_service: &PriceService,
    ) -> Option<PortfolioReport> {
        if portfolio.is_empty() {
            return None;
        }

        // Per-run cache, failures included, so no ticker is queried twice.
        let mut prices: HashMap<String, PriceLookup> = HashMap::new();
        let mut summaries: Vec<TickerSummary> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut unavailable: Vec<UnavailableTicker> = Vec::new();

        for holding in &portfolio.holdings {
            if !prices.contains_key(&holding.ticker) {
                let lookup = price_service.fetch_price(&holding.ticker).await;
                if let PriceLookup::Unavailable(reason) = &lookup {
                    warn!("Skipping {}: price unavailable ({reason})", holding.ticker);
                    unavailable.push(UnavailableTicker {
                        ticker: holding.ticker.clone(),
                        reason: reason.clone(),
                    });
                }
                prices.insert(holding.ticker.clone(), lookup);
            }

            let Some(current_price) = prices.get(&holding.ticker).and_then(PriceLookup::price)
            else {
                continue;
            };

            let slot = *index.entry(holding.ticker.clone()).or_insert_with(|| {
                summaries.push(TickerSummary {
                    ticker: holding.ticker.clone(),
                    total_shares: 0.0,
                    total_investment: 0.0,
                    current_price,
                });
                summaries.len() - 1
            });
            let summary = &mut summaries[slot];
            summary.total_shares += holding.shares;
            summary.total_investment += holding.cost();
        }

        let tickers: Vec<TickerReport> = summaries.iter().map(ticker_report).collect();

        let current_value: f64 = tickers.iter().map(|t| t.current_value).sum();
        let total_investment: f64 = tickers.iter().map(|t| t.total_investment).sum();
        let pnl = current_value - total_investment;

        debug!(
            priced = tickers.len(),
            unavailable = unavailable.len(),
            "Analysis complete: value {current_value:.2}, invested {total_investment:.2}"
        );

        Some(PortfolioReport {
            tickers,
            totals: PortfolioTotals {
                current_value,
                total_investment,
                pnl,
                pct_change: pct_change(pnl, total_investment),
                status: PnlStatus::from_pnl(pnl),
            },
            unavailable,
        })
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}

fn ticker_report(summary: &TickerSummary) -> TickerReport {
    let avg_cost = if summary.total_shares > 0.0 {
        summary.total_investment / summary.total_shares
    } else {
        0.0
    };
    let current_value = summary.total_shares * summary.current_price;
    let pnl = current_value - summary.total_investment;

    TickerReport {
        ticker: summary.ticker.clone(),
        total_shares: summary.total_shares,
        avg_cost,
        current_price: summary.current_price,
        current_value,
        total_investment: summary.total_investment,
        pnl,
        pct_change: pct_change(pnl, summary.total_investment),
        status: PnlStatus::from_pnl(pnl),
    }
}

/// Percentage return on `invested`; 0 when nothing was invested.
fn pct_change(pnl: f64, invested: f64) -> f64 {
    if invested != 0.0 {
        (pnl / invested) * 100.0
    } else {
        0.0
    }
}
