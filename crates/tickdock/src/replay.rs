//! Replaying moves and rendering the result.

use crate::script::ReplayScript;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tickdock_engine::{
    GameEngine, GameError, GameState, LineWinDetector, MAGIC_WEIGHTS, Move, WINNING_SUM,
};
use tracing::{info, instrument, warn};

/// How the final state is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The state as JSON: `{"board", "player", "numMoves", "status"}`.
    #[default]
    Json,
    /// The board as a grid followed by a summary line.
    Board,
}

/// Replay settings after command-line flags are merged over a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// How to print the final state.
    pub format: OutputFormat,
    /// Abort on the first rejected move.
    pub stop_on_error: bool,
}

impl ReplayOptions {
    /// Merges flags over an optional script.
    ///
    /// An explicit `format` replaces the script's; `stop_on_error` is set
    /// when either the flag or the script asks for it.
    pub fn resolve(
        format: Option<OutputFormat>,
        stop_on_error: bool,
        script: Option<&ReplayScript>,
    ) -> Self {
        let base = script
            .map(|script| Self {
                format: *script.format(),
                stop_on_error: *script.stop_on_error(),
            })
            .unwrap_or_default();

        Self {
            format: format.unwrap_or(base.format),
            stop_on_error: stop_on_error || base.stop_on_error,
        }
    }
}

/// A move the engine refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedMove {
    /// Position of the move in the input, from 0.
    pub index: usize,
    /// The move itself.
    pub mov: Move,
    /// Why it was refused.
    pub error: GameError,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// State after the last applied move.
    pub state: GameState,
    /// Moves the engine refused, in input order.
    pub rejected: Vec<RejectedMove>,
}

/// Replays `moves` against a fresh engine.
///
/// Rejected moves are recorded and skipped; with `stop_on_error` the replay
/// ends at the first one.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[Move], stop_on_error: bool) -> ReplayReport {
    let mut engine = GameEngine::new();
    let mut rejected = Vec::new();

    for (index, &mov) in moves.iter().enumerate() {
        if let Err(error) = engine.apply_move(mov.x, mov.y) {
            warn!(index, %mov, %error, "Skipping rejected move");
            rejected.push(RejectedMove { index, mov, error });
            if stop_on_error {
                break;
            }
        }
    }

    let state = engine.state();
    info!(status = %state.status(), moves = state.move_count(), "Replay finished");
    ReplayReport { state, rejected }
}

/// Renders a state in the requested format.
pub fn render(state: &GameState, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(state),
        OutputFormat::Board => Ok(format!(
            "{}\n\nplayer: {}  moves: {}  status: {}",
            state.board(),
            state.current_player(),
            state.move_count(),
            state.status()
        )),
    }
}

/// Describes a detector's line checks and the magic-square weights.
pub fn rules_text(detector: &LineWinDetector) -> String {
    let weights: Vec<String> = MAGIC_WEIGHTS
        .iter()
        .map(|row| format!("  {}", row.map(|w| w.to_string()).join(" ")))
        .collect();

    format!(
        "line checks (in order): {}\na line wins when its weights sum to {WINNING_SUM}:\n{}",
        detector.check_names().join(", "),
        weights.join("\n")
    )
}
