//! A game shared between concurrent callers.

use crate::engine::GameEngine;
use crate::error::GameError;
use crate::types::GameState;
use crate::validator::{MoveValidator, StandardValidator};
use crate::win::{LineWinDetector, WinDetector};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Cloneable handle to one engine behind a mutex.
///
/// Every operation holds the lock for its full duration, so callers never
/// observe a half-applied move.
#[derive(Debug)]
pub struct SharedGame<V = StandardValidator, W = LineWinDetector> {
    engine: Arc<Mutex<GameEngine<V, W>>>,
}

impl SharedGame {
    /// Creates a shared game with the standard rules.
    pub fn new() -> Self {
        Self::from_engine(GameEngine::new())
    }
}

impl Default for SharedGame {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Clone for SharedGame<V, W> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<V, W> SharedGame<V, W>
where
    V: MoveValidator,
    W: WinDetector,
{
    /// Wraps an existing engine.
    pub fn from_engine(engine: GameEngine<V, W>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }

    // The engine commits a move in a single assignment, so a panicking
    // holder cannot leave a half-applied move behind.
    fn lock(&self) -> MutexGuard<'_, GameEngine<V, W>> {
        self.engine.lock().unwrap_or_else(|poisoned| {
            warn!("Game lock poisoned; recovering");
            poisoned.into_inner()
        })
    }

    /// Starts a new game.
    #[instrument(skip(self))]
    pub fn reset(&self) -> GameState {
        self.lock().reset()
    }

    /// Plays the current player's mark at `(x, y)`.
    #[instrument(skip(self))]
    pub fn apply_move(&self, x: i32, y: i32) -> Result<GameState, GameError> {
        self.lock().apply_move(x, y)
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.lock().state()
    }
}
