mod cli;
mod commands;
mod error;
mod menu;
mod output;

use clap::Parser;
use portfolio_tracker_core::PortfolioTracker;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();

    let settings = cli.settings();
    debug!(
        "Opening {} with provider {}",
        settings.data_file.display(),
        settings.provider
    );

    let (mut tracker, warning) = PortfolioTracker::open(settings);
    if let Some(e) = warning {
        eprintln!(
            "Could not load {}, starting with an empty portfolio: {e}",
            cli.data_file.display()
        );
    }

    debug!("Price providers: {:?}", tracker.get_provider_names());

    match &cli.command {
        Some(command) => {
            let text = commands::run(&mut tracker, command, cli.format).await?;
            println!("{text}");
        }
        None => {
            let stdin = std::io::stdin();
            menu::run(&mut tracker, stdin.lock(), std::io::stdout(), cli.format).await?;
        }
    }

    Ok(())
}
