//! Win detection using magic-square weights.
//!
//! Every cell carries a weight from a 3x3 magic square. A player holds a
//! complete line exactly when the weights of their cells along that line
//! sum to [`WINNING_SUM`], so each check is a single sum comparison.

use crate::types::{BOARD_SIZE, Board, Cell, Coord, Player};
use std::fmt;
use tracing::{debug, instrument};

/// Weight of each cell, indexed `[x][y]`.
///
/// See <http://mathworld.wolfram.com/MagicSquare.html>.
pub const MAGIC_WEIGHTS: [[u8; BOARD_SIZE]; BOARD_SIZE] = [[8, 1, 6], [3, 5, 7], [4, 9, 2]];

/// Weight sum of any complete line.
pub const WINNING_SUM: u8 = 15;

/// Sums the weights of `player`'s cells among `cells` and compares with
/// [`WINNING_SUM`].
fn line_complete(board: &Board, player: Player, cells: impl IntoIterator<Item = Coord>) -> bool {
    let sum: u8 = cells
        .into_iter()
        .filter(|&coord| board.get(coord) == Cell::Occupied(player))
        .map(|coord| MAGIC_WEIGHTS[coord.x()][coord.y()])
        .sum();
    sum == WINNING_SUM
}

/// A check for one family of lines.
///
/// Implemented for the four standard checks and for any closure of the
/// right shape, so tests can inject checks with fixed answers.
pub trait LineCheck: Send + Sync {
    /// Returns true if `player` holds a complete line this check covers.
    fn check(&self, board: &Board, player: Player) -> bool;

    /// Short name used in trace output.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> LineCheck for F
where
    F: Fn(&Board, Player) -> bool + Send + Sync,
{
    fn check(&self, board: &Board, player: Player) -> bool {
        self(board, player)
    }
}

/// Any of the three columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnCheck;

impl LineCheck for ColumnCheck {
    fn check(&self, board: &Board, player: Player) -> bool {
        (0..BOARD_SIZE).any(|y| {
            line_complete(
                board,
                player,
                (0..BOARD_SIZE).map(|x| Coord::unchecked(x, y)),
            )
        })
    }

    fn name(&self) -> &'static str {
        "column"
    }
}

/// Any of the three rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct RowCheck;

impl LineCheck for RowCheck {
    fn check(&self, board: &Board, player: Player) -> bool {
        (0..BOARD_SIZE).any(|x| {
            line_complete(
                board,
                player,
                (0..BOARD_SIZE).map(|y| Coord::unchecked(x, y)),
            )
        })
    }

    fn name(&self) -> &'static str {
        "row"
    }
}

/// Top-left to bottom-right diagonal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiagonalCheck;

impl LineCheck for DiagonalCheck {
    fn check(&self, board: &Board, player: Player) -> bool {
        line_complete(
            board,
            player,
            (0..BOARD_SIZE).map(|i| Coord::unchecked(i, i)),
        )
    }

    fn name(&self) -> &'static str {
        "diagonal"
    }
}

/// Top-right to bottom-left diagonal.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntiDiagonalCheck;

impl LineCheck for AntiDiagonalCheck {
    fn check(&self, board: &Board, player: Player) -> bool {
        line_complete(
            board,
            player,
            (0..BOARD_SIZE).map(|i| Coord::unchecked(i, BOARD_SIZE - 1 - i)),
        )
    }

    fn name(&self) -> &'static str {
        "anti-diagonal"
    }
}

/// Decides whether a player has won.
pub trait WinDetector {
    /// Returns true if `player` holds a winning line on `board`.
    fn has_won(&self, board: &Board, player: Player) -> bool;
}

/// Win detector that runs an ordered list of [`LineCheck`]s.
///
/// The first check reporting a line wins; with no checks nobody ever wins.
pub struct LineWinDetector {
    checks: Vec<Box<dyn LineCheck>>,
}

impl LineWinDetector {
    /// Creates a detector running `checks` in order.
    pub fn new(checks: Vec<Box<dyn LineCheck>>) -> Self {
        Self { checks }
    }

    /// Creates a detector with no checks.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Appends a check to the end of the list.
    pub fn with_check(mut self, check: impl LineCheck + 'static) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Names of the checks, in evaluation order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|check| check.name()).collect()
    }
}

impl Default for LineWinDetector {
    /// Columns, rows, then both diagonals.
    fn default() -> Self {
        Self::empty()
            .with_check(ColumnCheck)
            .with_check(RowCheck)
            .with_check(DiagonalCheck)
            .with_check(AntiDiagonalCheck)
    }
}

impl fmt::Debug for LineWinDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineWinDetector")
            .field("checks", &self.check_names())
            .finish()
    }
}

impl WinDetector for LineWinDetector {
    #[instrument(skip(self, board))]
    fn has_won(&self, board: &Board, player: Player) -> bool {
        match self.checks.iter().find(|check| check.check(board, player)) {
            Some(check) => {
                debug!(check = check.name(), %player, "Winning line found");
                true
            }
            None => false,
        }
    }
}
