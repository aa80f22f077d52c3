//! Rendering of listings and reports as text tables or JSON.

use std::fmt::Write as _;

use portfolio_tracker_core::models::analytics::PortfolioReport;
use portfolio_tracker_core::models::holding::Holding;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub const EMPTY_PORTFOLIO: &str = "Your portfolio is empty. Add a holding first.";

pub fn render_holdings(holdings: &[Holding], format: OutputFormat) -> Result<String, CliError> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(holdings)?);
    }
    if holdings.is_empty() {
        return Ok(EMPTY_PORTFOLIO.to_string());
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<10} {:>12} {:>14} {:<12}",
        "#", "Ticker", "Shares", "Price", "Date"
    );
    for (i, h) in holdings.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<10} {:>12} {:>14.2} {:<12}",
            i + 1,
            h.ticker,
            h.shares,
            h.purchase_price,
            h.purchase_date
        );
    }
    Ok(out.trim_end().to_string())
}

/// Render an analysis result. `None` means there was nothing to analyze.
pub fn render_report(
    report: Option<&PortfolioReport>,
    format: OutputFormat,
) -> Result<String, CliError> {
    let Some(report) = report else {
        return Ok(match format {
            OutputFormat::Json => "null".to_string(),
            OutputFormat::Table => EMPTY_PORTFOLIO.to_string(),
        });
    };
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(report)?);
    }

    let mut out = String::new();
    for skipped in &report.unavailable {
        let _ = writeln!(
            out,
            "Warning: no price for {}, excluded from totals ({})",
            skipped.ticker, skipped.reason
        );
    }
    if !report.unavailable.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{:<10} {:>12} {:>12} {:>12} {:>14} {:>14} {:>9} {:<6}",
        "Ticker", "Shares", "Avg Cost", "Price", "Value", "P&L", "Change", "Status"
    );
    for t in &report.tickers {
        let _ = writeln!(
            out,
            "{:<10} {:>12} {:>12.2} {:>12.2} {:>14.2} {:>14.2} {:>8.2}% {:<6}",
            t.ticker,
            t.total_shares,
            t.avg_cost,
            t.current_price,
            t.current_value,
            t.pnl,
            t.pct_change,
            t.status
        );
    }

    let totals = &report.totals;
    let _ = writeln!(out);
    let _ = writeln!(out, "Total value:      {:.2}", totals.current_value);
    let _ = writeln!(out, "Total invested:   {:.2}", totals.total_investment);
    let _ = writeln!(
        out,
        "Total P&L:        {:.2} ({:.2}%) {}",
        totals.pnl, totals.pct_change, totals.status
    );
    Ok(out.trim_end().to_string())
}
