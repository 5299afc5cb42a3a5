//! Command-line interface for tickdock.

use crate::replay::OutputFormat;
use clap::{Parser, Subcommand};

/// tickdock - replay tic-tac-toe games against the rules engine
#[derive(Parser, Debug)]
#[command(name = "tickdock")]
#[command(about = "Replay tic-tac-toe games against the rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay moves against a fresh game and print the final state
    Play {
        /// Moves as whitespace-separated "x,y" pairs, e.g. "1,1 0,1 1,0"
        #[arg(short, long, conflicts_with = "script", required_unless_present = "script")]
        moves: Option<String>,

        /// TOML replay script with a `moves = [[x, y], ...]` list
        #[arg(short, long)]
        script: Option<std::path::PathBuf>,

        /// Output format (overrides the script's `format`)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Abort with an error on the first rejected move
        #[arg(long)]
        stop_on_error: bool,
    },

    /// Show the win-detection rules: line checks and magic-square weights
    Rules,
}
