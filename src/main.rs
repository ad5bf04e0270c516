//! Tally command-line front end.
//!
//! Plays the role of the calculator page: a display, a keypad fed from the
//! command line or stdin, and a history panel that can be toggled.

mod cli;

use std::path::Path;

use anyhow::Context;
use tally::{
    Calculator, CalculatorService, ClientConfig, HistoryLog, HttpCalculatorService, Input,
    SessionCheckpoint,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::load(cli.api_url.as_deref())?;
    tracing::info!(api_url = %config.api_url, "tally v{}", env!("CARGO_PKG_VERSION"));

    let service = HttpCalculatorService::from_config(&config)?;

    match cli.command {
        Command::Keys { ref sequence } => {
            let inputs = Input::parse_sequence(sequence)?;
            let mut calc = open_session(service, cli.session.as_deref())?;

            for err in calc.press_all(inputs).await {
                eprintln!("{err}");
            }
            println!("{}", calc.display());

            save_session(&calc, cli.session.as_deref())?;
        }
        Command::Repl => {
            let mut calc = open_session(service, cli.session.as_deref())?;
            calc.mount().await;
            repl(&mut calc).await?;
            save_session(&calc, cli.session.as_deref())?;
        }
        Command::History { clear } => {
            if clear {
                service
                    .clear_history()
                    .await
                    .context("failed to clear history")?;
                println!("History cleared");
            } else {
                let entries = service.history().await.context("failed to fetch history")?;
                print_history(&HistoryLog::from(entries));
            }
        }
        Command::Health => {
            let status = service
                .health()
                .await
                .context("calculator API is not healthy")?;
            println!("{status}");
        }
    }

    Ok(())
}

fn open_session<S: CalculatorService>(
    service: S,
    path: Option<&Path>,
) -> anyhow::Result<Calculator<S>> {
    let checkpoint = match path {
        Some(path) => SessionCheckpoint::load(path)
            .with_context(|| format!("failed to resume session {}", path.display()))?,
        None => None,
    };

    match checkpoint {
        Some(checkpoint) => {
            tracing::debug!(id = %checkpoint.id, "resuming session");
            Ok(Calculator::restore(service, &checkpoint)?)
        }
        None => Ok(Calculator::new(service)),
    }
}

fn save_session<S: CalculatorService>(
    calc: &Calculator<S>,
    path: Option<&Path>,
) -> anyhow::Result<()> {
    if let Some(path) = path {
        calc.checkpoint()
            .save(path)
            .with_context(|| format!("failed to save session {}", path.display()))?;
    }
    Ok(())
}

async fn repl<S: CalculatorService>(calc: &mut Calculator<S>) -> anyhow::Result<()> {
    println!("Keys: 0-9 . + - * / = C   Commands: :history :clear-history :quit");
    render(calc);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            ":quit" | ":q" => break,
            ":history" => {
                calc.toggle_history();
            }
            ":clear-history" => calc.clear_history().await,
            keys => match Input::parse_sequence(keys) {
                Ok(inputs) => {
                    for err in calc.press_all(inputs).await {
                        eprintln!("! {err}");
                    }
                }
                Err(err) => eprintln!("! {err}"),
            },
        }
        render(calc);
    }

    Ok(())
}

fn render<S: CalculatorService>(calc: &Calculator<S>) {
    println!("[ {:>20} ]", calc.display());
    if calc.history().is_visible() {
        print_history(calc.history().log());
    }
}

fn print_history(log: &HistoryLog) {
    println!("Calculation History");
    if log.is_empty() {
        println!("  No calculations yet");
        return;
    }
    for entry in log.entries() {
        println!("  {:<32} {}", entry.expression, entry.local_time());
    }
}
