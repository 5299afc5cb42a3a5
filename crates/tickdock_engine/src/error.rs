//! Error types for the rules engine.

use crate::types::Player;
use derive_more::{Display, Error, From};

/// Board axis named by an out-of-range coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    /// Row axis.
    X,
    /// Column axis.
    Y,
}

/// Why a proposed move is illegal on the current board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum InvalidMoveError {
    /// A coordinate lies outside `0..=2`.
    #[display("invalid {axis} index: {value}")]
    OutOfRange {
        /// The offending axis.
        axis: Axis,
        /// The value supplied for it.
        value: i32,
    },

    /// The target cell already holds a mark.
    #[display("space already taken: [{x}][{y}]: {occupant}")]
    CellOccupied {
        /// Row of the cell.
        x: usize,
        /// Column of the cell.
        y: usize,
        /// Player already holding the cell.
        occupant: Player,
    },
}

/// Error returned by [`GameEngine::apply_move`](crate::GameEngine::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, From)]
pub enum GameError {
    /// The game reached a draw or a win; reset to play again.
    #[display("game over")]
    GameOver,

    /// The move was rejected by the validator.
    #[display("invalid move: {_0}")]
    #[from]
    InvalidMove(#[error(source)] InvalidMoveError),
}

/// A wire value that is not a player number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid player value: {value} (expected 1 or 2)")]
pub struct InvalidPlayerValue {
    /// The rejected value.
    pub value: u8,
}

/// A wire value that is not a cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("invalid cell value: {value} (expected 0, 1 or 2)")]
pub struct InvalidCellValue {
    /// The rejected value.
    pub value: u8,
}

/// A deserialized state the engine could never have produced.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("invalid game state: {}", reasons.join("; "))]
pub struct InvalidGameState {
    /// Every rule the state breaks.
    pub reasons: Vec<String>,
}

/// Text that does not describe a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("cannot parse move from {input:?}: expected \"x,y\"")]
pub struct ParseMoveError {
    /// The rejected input.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_out_of_range_messages() {
        let err = InvalidMoveError::OutOfRange {
            axis: Axis::X,
            value: -1,
        };
        assert_eq!(err.to_string(), "invalid x index: -1");

        let err = InvalidMoveError::OutOfRange {
            axis: Axis::Y,
            value: 3,
        };
        assert_eq!(err.to_string(), "invalid y index: 3");
    }

    #[test]
    fn test_cell_occupied_message() {
        let err = InvalidMoveError::CellOccupied {
            x: 1,
            y: 2,
            occupant: Player::Two,
        };
        assert_eq!(err.to_string(), "space already taken: [1][2]: 2");
    }

    #[test]
    fn test_game_error_wraps_cause() {
        let cause = InvalidMoveError::OutOfRange {
            axis: Axis::X,
            value: 3,
        };
        let err = GameError::from(cause);
        assert_eq!(err.to_string(), "invalid move: invalid x index: 3");
        assert!(err.source().is_some());
        assert_eq!(GameError::GameOver.to_string(), "game over");
        assert!(GameError::GameOver.source().is_none());
    }
}
