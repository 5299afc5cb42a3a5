//! Replay scripts and move lists.

use crate::replay::OutputFormat;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tickdock_engine::{Move, ParseMoveError};
use tracing::{debug, info, instrument};

/// A scripted game loaded from TOML.
///
/// ```toml
/// moves = [[1, 1], [0, 1], [1, 0]]
/// format = "board"
/// stop_on_error = true
/// ```
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Moves as `[x, y]` pairs, in play order.
    moves: Vec<[i32; 2]>,

    /// How to print the final state.
    #[serde(default)]
    format: OutputFormat,

    /// Abort on the first rejected move instead of skipping it.
    #[serde(default)]
    stop_on_error: bool,
}

impl ReplayScript {
    /// Creates a script from moves with default options.
    pub fn new(moves: Vec<[i32; 2]>) -> Self {
        Self {
            moves,
            format: OutputFormat::default(),
            stop_on_error: false,
        }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading replay script from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read replay script: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let script: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse replay script: {}", e)))?;
        info!(moves = script.moves.len(), "Replay script loaded");
        Ok(script)
    }

    /// The scripted moves as engine moves.
    pub fn to_moves(&self) -> Vec<Move> {
        self.moves.iter().copied().map(Move::from).collect()
    }
}

/// Parses whitespace-separated `x,y` pairs.
#[instrument]
pub fn parse_moves(text: &str) -> Result<Vec<Move>, ParseMoveError> {
    text.split_whitespace().map(str::parse).collect()
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
