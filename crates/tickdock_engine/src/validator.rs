//! Move legality.
//!
//! Validation is a pure function of the board and the proposed
//! coordinates. It does not look at whose turn it is.

use crate::error::{Axis, InvalidMoveError};
use crate::types::{BOARD_SIZE, Board, Cell, Coord};
use tracing::{debug, instrument};

/// Decides whether a move is legal on a board.
///
/// On success the checked coordinate is returned; validation never mutates
/// the board.
pub trait MoveValidator {
    /// Validates a move at `(x, y)`.
    fn validate(&self, board: &Board, x: i32, y: i32) -> Result<Coord, InvalidMoveError>;
}

/// The standard rules: both coordinates in `0..=2` and the cell empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandardValidator;

impl MoveValidator for StandardValidator {
    fn validate(&self, board: &Board, x: i32, y: i32) -> Result<Coord, InvalidMoveError> {
        validate_move(board, x, y)
    }
}

impl<F> MoveValidator for F
where
    F: Fn(&Board, i32, i32) -> Result<Coord, InvalidMoveError>,
{
    fn validate(&self, board: &Board, x: i32, y: i32) -> Result<Coord, InvalidMoveError> {
        self(board, x, y)
    }
}

/// Checks a move against the standard rules.
///
/// Bounds are checked before occupancy, and `x` before `y`.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, x: i32, y: i32) -> Result<Coord, InvalidMoveError> {
    let row = axis_index(Axis::X, x)?;
    let col = axis_index(Axis::Y, y)?;
    let coord = Coord::unchecked(row, col);

    if let Cell::Occupied(occupant) = board.get(coord) {
        debug!(%coord, %occupant, "Cell already occupied");
        return Err(InvalidMoveError::CellOccupied {
            x: row,
            y: col,
            occupant,
        });
    }

    Ok(coord)
}

fn axis_index(axis: Axis, value: i32) -> Result<usize, InvalidMoveError> {
    usize::try_from(value)
        .ok()
        .filter(|&index| index < BOARD_SIZE)
        .ok_or_else(|| {
            debug!(%axis, value, "Coordinate out of range");
            InvalidMoveError::OutOfRange { axis, value }
        })
}
