//! Tic-tac-toe rules engine.
//!
//! The engine holds the authoritative state of one game and applies the
//! rules to it:
//!
//! - **Validation**: a [`MoveValidator`] decides whether a move is legal.
//! - **Win detection**: a [`WinDetector`] decides whether a player completed
//!   a line. The standard [`LineWinDetector`] runs an ordered list of
//!   [`LineCheck`]s that compare magic-square weight sums.
//! - **State machine**: [`GameEngine`] places marks, rotates players and
//!   moves the game from alive to won or drawn.
//!
//! # Example
//!
//! ```
//! use tickdock_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.apply_move(x, y)?;
//! }
//!
//! let state = engine.state();
//! assert_eq!(state.status(), GameStatus::Ended);
//! assert_eq!(state.current_player(), Player::One);
//! # Ok::<(), tickdock_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
mod invariants;
mod shared;
mod types;
mod validator;
mod win;

pub use action::Move;
pub use engine::GameEngine;
pub use error::{
    Axis, GameError, InvalidCellValue, InvalidGameState, InvalidMoveError, InvalidPlayerValue,
    ParseMoveError,
};
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarksAlternate,
    MoveCountMatchesBoard, TurnMatchesBoard, assert_invariants, check_invariants,
};
pub use shared::SharedGame;
pub use types::{BOARD_SIZE, Board, CELL_COUNT, Cell, Coord, GameState, GameStatus, Player};
pub use validator::{MoveValidator, StandardValidator, validate_move};
pub use win::{
    AntiDiagonalCheck, ColumnCheck, DiagonalCheck, LineCheck, LineWinDetector, MAGIC_WEIGHTS,
    RowCheck, WINNING_SUM, WinDetector,
};
