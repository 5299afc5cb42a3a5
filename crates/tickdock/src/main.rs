//! tickdock - replay tic-tac-toe games from the command line.

#![warn(missing_docs)]

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tickdock::{
    Cli, Command, OutputFormat, ReplayOptions, ReplayScript, parse_moves, render, replay,
    rules_text,
};
use tickdock_engine::LineWinDetector;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    initialize_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            moves,
            script,
            format,
            stop_on_error,
        } => run_play(moves, script, format, stop_on_error),
        Command::Rules => run_rules(),
    }
}

/// Replay moves and print the final state
#[instrument(skip(moves))]
fn run_play(
    moves: Option<String>,
    script: Option<PathBuf>,
    format: Option<OutputFormat>,
    stop_on_error: bool,
) -> Result<()> {
    let (moves, script) = match (moves, script) {
        (Some(text), _) => (parse_moves(&text).context("invalid --moves")?, None),
        (None, Some(path)) => {
            let script = ReplayScript::from_file(&path)?;
            (script.to_moves(), Some(script))
        }
        (None, None) => bail!("either --moves or --script is required"),
    };

    let options = ReplayOptions::resolve(format, stop_on_error, script.as_ref());
    let report = replay(&moves, options.stop_on_error);

    println!("{}", render(&report.state, options.format)?);

    if options.stop_on_error && let Some(first) = report.rejected.first() {
        bail!("move {} ({}) rejected: {}", first.index + 1, first.mov, first.error);
    }

    Ok(())
}

/// Print the line checks and magic-square weights
#[instrument]
fn run_rules() -> Result<()> {
    let detector = LineWinDetector::default();
    info!(checks = ?detector.check_names(), "Active win detector");

    println!("{}", rules_text(&detector));

    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tickdock_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
