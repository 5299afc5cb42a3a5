//! The game engine: authoritative state plus the rules that move it.
//!
//! ```text
//! Alive --apply_move--> Alive | Ended | Draw
//! Ended, Draw --apply_move--> GameOver error (state frozen)
//! any --reset--> Alive
//! ```

use crate::action::Move;
use crate::error::GameError;
use crate::invariants::assert_invariants;
use crate::types::{CELL_COUNT, GameState, GameStatus};
use crate::validator::{MoveValidator, StandardValidator};
use crate::win::{LineWinDetector, WinDetector};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe engine.
///
/// The validator and win detector are injected; [`GameEngine::new`] uses
/// the standard rules. The engine is single-threaded; wrap it in
/// [`SharedGame`](crate::SharedGame) to share it between callers.
#[derive(Debug)]
pub struct GameEngine<V = StandardValidator, W = LineWinDetector> {
    state: GameState,
    validator: V,
    detector: W,
}

impl GameEngine {
    /// Creates an engine with the standard rules and a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(StandardValidator, LineWinDetector::default())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> GameEngine<V, W>
where
    V: MoveValidator,
    W: WinDetector,
{
    /// Creates an engine with custom rules and a fresh game.
    #[instrument(skip_all)]
    pub fn with_rules(validator: V, detector: W) -> Self {
        debug!("Creating game engine");
        Self {
            state: GameState::new(),
            validator,
            detector,
        }
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the move validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Returns the win detector.
    pub fn detector(&self) -> &W {
        &self.detector
    }

    /// Starts a new game: empty board, player 1 to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameState {
        self.state = GameState::new();
        info!("Game reset");
        self.state
    }

    /// Plays the current player's mark at `(x, y)`.
    ///
    /// On a win the status becomes [`GameStatus::Ended`] and the winner stays
    /// current; on a full board without a winner it becomes
    /// [`GameStatus::Draw`]. Otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has ended.
    /// - [`GameError::InvalidMove`] if the validator rejects the move.
    ///
    /// Neither error changes the state.
    #[instrument(
        skip(self),
        fields(player = %self.state.current_player(), move_count = self.state.move_count())
    )]
    pub fn apply_move(&mut self, x: i32, y: i32) -> Result<GameState, GameError> {
        if self.state.status().is_terminal() {
            warn!(status = %self.state.status(), "Move rejected: game over");
            return Err(GameError::GameOver);
        }

        let coord = self
            .validator
            .validate(self.state.board(), x, y)
            .inspect_err(|cause| warn!(%cause, "Move rejected"))?;

        // Work on a copy so a panicking detector leaves the state untouched.
        let mut next = self.state;
        let player = next.current_player();
        next.place_mark(coord);
        debug!(%coord, %player, "Mark placed");

        if self.detector.has_won(next.board(), player) {
            next.set_status(GameStatus::Ended);
            info!(%player, move_count = next.move_count(), "Game won");
        } else if usize::from(next.move_count()) == CELL_COUNT {
            next.set_status(GameStatus::Draw);
            info!("Game drawn");
        } else {
            next.advance_player();
        }

        assert_invariants(&next);
        self.state = next;
        Ok(self.state)
    }

    /// Applies `moves` in order, stopping at the first rejected move.
    ///
    /// Moves before the rejected one stay applied.
    #[instrument(skip(self, moves), fields(count = moves.len()))]
    pub fn play_all(&mut self, moves: &[Move]) -> Result<GameState, GameError> {
        for mov in moves {
            self.apply_move(mov.x, mov.y)?;
        }
        Ok(self.state)
    }
}
