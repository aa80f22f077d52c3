//! Interactive menu loop.

use std::io::{BufRead, Write};

use portfolio_tracker_core::PortfolioTracker;

use crate::cli::{today, OutputFormat};
use crate::error::CliError;
use crate::output;

const MENU: &str = "\
--- Portfolio Tracker ---
1. Add holding
2. Remove holding
3. View holdings
4. Analyze portfolio
5. Exit";

/// Run the menu until the user exits or input ends.
pub async fn run<R: BufRead, W: Write>(
    tracker: &mut PortfolioTracker,
    mut input: R,
    mut out: W,
    format: OutputFormat,
) -> Result<(), CliError> {
    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add(tracker, &mut input, &mut out)?,
            "2" => remove(tracker, &mut input, &mut out)?,
            "3" => writeln!(out, "{}", output::render_holdings(tracker.holdings(), format)?)?,
            "4" => {
                writeln!(out, "Fetching current prices...")?;
                let report = tracker.analyze().await;
                writeln!(out, "{}", output::render_report(report.as_ref(), format)?)?;
            }
            "5" | "q" | "quit" | "exit" => break,
            other => writeln!(out, "Unknown option {other:?}, please choose 1-5.")?,
        }
    }

    if tracker.has_unsaved_changes() {
        writeln!(out, "Warning: some changes could not be saved.")?;
    }
    writeln!(out, "Goodbye!")?;
    Ok(())
}

fn add<R: BufRead, W: Write>(
    tracker: &mut PortfolioTracker,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let Some(ticker) = prompt(input, out, "Ticker: ")? else {
        return Ok(());
    };
    let Some(shares) = prompt_number(input, out, "Shares: ")? else {
        return Ok(());
    };
    let Some(price) = prompt_number(input, out, "Purchase price per share: ")? else {
        return Ok(());
    };
    let Some(date) = prompt(input, out, "Purchase date [today]: ")? else {
        return Ok(());
    };
    let date = if date.is_empty() { today() } else { date };

    match tracker.add_holding(&ticker, shares, price, &date) {
        Ok(mutation) => {
            match mutation.save_error {
                None => writeln!(out, "Added {} shares of {}.", shares, ticker.to_uppercase())?,
                Some(e) => writeln!(out, "Added {}, but saving failed: {e}", ticker.to_uppercase())?,
            }
        }
        Err(e) => writeln!(out, "{e}")?,
    }
    Ok(())
}

fn remove<R: BufRead, W: Write>(
    tracker: &mut PortfolioTracker,
    input: &mut R,
    out: &mut W,
) -> Result<(), CliError> {
    let Some(ticker) = prompt(input, out, "Ticker to remove: ")? else {
        return Ok(());
    };

    let mutation = tracker.remove_ticker(&ticker);
    match (mutation.value, mutation.save_error) {
        (0, _) => writeln!(out, "No holdings found for {}.", ticker.to_uppercase())?,
        (n, None) => writeln!(out, "Removed {n} holding(s) of {}.", ticker.to_uppercase())?,
        (n, Some(e)) => writeln!(
            out,
            "Removed {n} holding(s) of {}, but saving failed: {e}",
            ticker.to_uppercase()
        )?,
    }
    Ok(())
}

/// Print `label` and read one trimmed line. `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<String>, CliError> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Like [`prompt`], re-asking until the answer parses as a number.
fn prompt_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    label: &str,
) -> Result<Option<f64>, CliError> {
    loop {
        let Some(answer) = prompt(input, out, label)? else {
            return Ok(None);
        };
        match answer.parse::<f64>() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(out, "{answer:?} is not a number, try again.")?,
        }
    }
}
