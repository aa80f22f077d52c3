//! One-shot subcommands.

use portfolio_tracker_core::models::holding::canonical_ticker;
use portfolio_tracker_core::PortfolioTracker;

use crate::cli::{today, AddArgs, Command, OutputFormat};
use crate::error::CliError;
use crate::output;

/// Run a single subcommand and return the text to print.
pub async fn run(
    tracker: &mut PortfolioTracker,
    command: &Command,
    format: OutputFormat,
) -> Result<String, CliError> {
    match command {
        Command::Add(args) => add(tracker, args),
        Command::Remove { ticker } => {
            let removed = tracker
                .remove_ticker(ticker)
                .into_result()
                .map_err(CliError::Unsaved)?;
            Ok(if removed == 0 {
                format!("No holdings found for {}.", canonical_ticker(ticker))
            } else {
                format!("Removed {removed} holding(s) of {}.", canonical_ticker(ticker))
            })
        }
        Command::List => output::render_holdings(tracker.holdings(), format),
        Command::Analyze => {
            let report = tracker.analyze().await;
            output::render_report(report.as_ref(), format)
        }
    }
}

fn add(tracker: &mut PortfolioTracker, args: &AddArgs) -> Result<String, CliError> {
    let date = args.date.clone().unwrap_or_else(today);
    tracker
        .add_holding(&args.ticker, args.shares, args.price, &date)?
        .into_result()
        .map_err(CliError::Unsaved)?;
    Ok(format!(
        "Added {} shares of {} at {:.2} ({date}).",
        args.shares,
        canonical_ticker(&args.ticker),
        args.price
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_tracker_core::models::settings::{ProviderKind, Settings};

    fn offline_settings(dir: &tempfile::TempDir) -> Settings {
        let mut settings = Settings::new(dir.path().join("holdings.json"));
        settings.provider = ProviderKind::Offline;
        settings
    }

    #[tokio::test]
    async fn add_list_remove_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let (mut tracker, warning) = PortfolioTracker::open(offline_settings(&dir));
        assert!(warning.is_none());

        let add = Command::Add(AddArgs {
            ticker: "goog".into(),
            shares: 4.0,
            price: 120.0,
            date: Some("2024-05-01".into()),
        });
        let msg = run(&mut tracker, &add, OutputFormat::Table).await.unwrap();
        assert_eq!(msg, "Added 4 shares of GOOG at 120.00 (2024-05-01).");

        // A fresh tracker sees the saved lot.
        let (mut reopened, _) = PortfolioTracker::open(offline_settings(&dir));
        let listing = run(&mut reopened, &Command::List, OutputFormat::Table)
            .await
            .unwrap();
        assert!(listing.contains("GOOG"));

        let msg = run(
            &mut reopened,
            &Command::Remove {
                ticker: "Goog".into(),
            },
            OutputFormat::Table,
        )
        .await
        .unwrap();
        assert_eq!(msg, "Removed 1 holding(s) of GOOG.");
    }

    #[tokio::test]
    async fn analyze_with_offline_prices() {
        let dir = tempfile::tempdir().unwrap();
        let (mut tracker, _) = PortfolioTracker::open(offline_settings(&dir));
        tracker
            .add_holding("GOOG", 10.0, 100.0, "2024-01-01")
            .unwrap()
            .into_result()
            .unwrap();

        let json = run(&mut tracker, &Command::Analyze, OutputFormat::Json)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tickers"][0]["current_price"], 140.5);
        assert_eq!(value["totals"]["current_value"], 1405.0);
    }

    #[tokio::test]
    async fn invalid_add_maps_to_input_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let (mut tracker, _) = PortfolioTracker::open(offline_settings(&dir));

        let add = Command::Add(AddArgs {
            ticker: "aapl".into(),
            shares: 1.0,
            price: -5.0,
            date: None,
        });
        let err = run(&mut tracker, &add, OutputFormat::Table)
            .await
            .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(tracker.holding_count(), 0);
    }

    #[tokio::test]
    async fn failed_save_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = offline_settings(&dir);
        settings.data_file = dir.path().join("missing-dir").join("holdings.json");
        let (mut tracker, _) = PortfolioTracker::open(settings);

        let add = Command::Add(AddArgs {
            ticker: "aapl".into(),
            shares: 1.0,
            price: 5.0,
            date: None,
        });
        let err = run(&mut tracker, &add, OutputFormat::Table)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Unsaved(_)));
        assert_eq!(tracker.holding_count(), 1);
        assert!(tracker.has_unsaved_changes());
    }
}
