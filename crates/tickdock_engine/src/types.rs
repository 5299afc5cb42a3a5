//! Core domain types for the 3x3 board.

use crate::error::{InvalidCellValue, InvalidGameState, InvalidPlayerValue};
use crate::invariants::check_invariants;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Player in the game.
///
/// On the wire a player is its number: `1` or `2`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Player {
    /// Player 1 (moves first).
    #[display("1")]
    One,
    /// Player 2.
    #[display("2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the player's number (1 or 2).
    pub fn value(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.value()
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayerValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(InvalidPlayerValue { value }),
        }
    }
}

/// A cell on the board.
///
/// On the wire a cell is `0` when empty, otherwise the occupant's number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the player holding this cell, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Returns the wire value of the cell (0, 1 or 2).
    pub fn value(self) -> u8 {
        self.occupant().map_or(0, Player::value)
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.value()
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            _ => Player::try_from(value)
                .map(Cell::Occupied)
                .map_err(|_| InvalidCellValue { value }),
        }
    }
}

/// A coordinate known to lie on the board.
///
/// `x` selects the row and `y` the column, so `board[x][y]` is the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    x: usize,
    y: usize,
}

impl Coord {
    /// Creates a coordinate, or `None` when it falls off the board.
    pub fn new(x: usize, y: usize) -> Option<Self> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    /// Row index.
    pub fn x(self) -> usize {
        self.x
    }

    /// Column index.
    pub fn y(self) -> usize {
        self.y
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Coord { x, y }))
    }

    pub(crate) const fn unchecked(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}][{}]", self.x, self.y)
    }
}

/// 3x3 board.
///
/// Serializes as a 3x3 array of cell values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from wire values, row by row.
    pub fn from_values(values: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, InvalidCellValue> {
        let mut board = Self::new();
        for coord in Coord::all() {
            board.set(coord, Cell::try_from(values[coord.x][coord.y])?);
        }
        Ok(board)
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.x][coord.y]
    }

    /// Sets the cell at the given coordinate.
    ///
    /// This is raw storage access; move legality lives in the validator.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.x][coord.y] = cell;
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        Coord::all().filter(|&c| !self.get(c).is_empty()).count()
    }

    /// Number of cells held by `player`.
    pub fn count_of(&self, player: Player) -> usize {
        Coord::all()
            .filter(|&c| self.get(c) == Cell::Occupied(player))
            .count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    /// Returns the rows of the board as wire values.
    pub fn values(&self) -> [[u8; BOARD_SIZE]; BOARD_SIZE] {
        self.cells.map(|row| row.map(Cell::value))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            let line = row
                .iter()
                .map(|cell| cell.value().to_string())
                .collect::<Vec<_>>()
                .join("|");
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Lifecycle status of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    #[serde(rename = "alive")]
    #[strum(serialize = "alive")]
    Alive,
    /// Board filled with no winner.
    #[serde(rename = "draw")]
    #[strum(serialize = "draw")]
    Draw,
    /// The current player completed a line.
    #[serde(rename = "end")]
    #[strum(serialize = "end")]
    Ended,
}

impl GameStatus {
    /// Checks if the game accepts no further moves.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Draw | GameStatus::Ended)
    }
}

/// Complete game state.
///
/// Serializes as `{"board", "player", "numMoves", "status"}`. Deserializing
/// rejects any state the engine could not have produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateWire")]
pub struct GameState {
    board: Board,
    #[serde(rename = "player")]
    current_player: Player,
    #[serde(rename = "numMoves")]
    move_count: u8,
    status: GameStatus,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::One,
            move_count: 0,
            status: GameStatus::Alive,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    ///
    /// After a win this is the winner.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns how many moves have been applied.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Places the current player's mark (unchecked; the engine validates first).
    pub(crate) fn place_mark(&mut self, coord: Coord) {
        self.board.set(coord, Cell::Occupied(self.current_player));
        self.move_count += 1;
    }

    pub(crate) fn advance_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        board: Board,
        current_player: Player,
        move_count: u8,
        status: GameStatus,
    ) -> Self {
        Self {
            board,
            current_player,
            move_count,
            status,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct GameStateWire {
    board: Board,
    #[serde(rename = "player")]
    current_player: Player,
    #[serde(rename = "numMoves")]
    move_count: u8,
    status: GameStatus,
}

impl TryFrom<GameStateWire> for GameState {
    type Error = InvalidGameState;

    fn try_from(wire: GameStateWire) -> Result<Self, Self::Error> {
        let state = Self {
            board: wire.board,
            current_player: wire.current_player,
            move_count: wire.move_count,
            status: wire.status,
        };

        let mut reasons = Vec::new();
        if usize::from(state.move_count) > CELL_COUNT {
            reasons.push(format!("move count {} exceeds {CELL_COUNT}", state.move_count));
        }
        if state.status == GameStatus::Draw && !state.board.is_full() {
            reasons.push("draw on a board with empty cells".to_string());
        }
        if let Err(violations) = check_invariants(&state) {
            reasons.extend(violations.into_iter().map(|v| v.description));
        }

        if reasons.is_empty() {
            Ok(state)
        } else {
            Err(InvalidGameState { reasons })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
    }

    #[test]
    fn test_cell_values() {
        assert_eq!(Cell::Empty.value(), 0);
        assert_eq!(Cell::Occupied(Player::One).value(), 1);
        assert_eq!(Cell::Occupied(Player::Two).value(), 2);
        assert_eq!(Cell::try_from(3), Err(InvalidCellValue { value: 3 }));
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_some());
        assert!(Coord::new(3, 0).is_none());
        assert!(Coord::new(0, 3).is_none());
        assert_eq!(Coord::all().count(), CELL_COUNT);
    }

    #[test]
    fn test_board_from_values() {
        let board = Board::from_values([[1, 2, 1], [0, 2, 0], [1, 2, 0]]).unwrap();
        assert_eq!(board.occupied_count(), 6);
        assert_eq!(board.count_of(Player::One), 3);
        assert_eq!(board.count_of(Player::Two), 3);
        assert_eq!(board.values(), [[1, 2, 1], [0, 2, 0], [1, 2, 0]]);
        assert!(!board.is_full());
    }

    #[test]
    fn test_board_display() {
        let board = Board::from_values([[1, 2, 1], [0, 2, 0], [1, 2, 0]]).unwrap();
        assert_eq!(board.to_string(), "1|2|1\n-+-+-\n0|2|0\n-+-+-\n1|2|0");
    }

    #[test]
    fn test_status_strings() {
        assert_eq!(GameStatus::Alive.to_string(), "alive");
        assert_eq!(GameStatus::Ended.as_ref(), "end");
        assert_eq!("draw".parse::<GameStatus>().unwrap(), GameStatus::Draw);
        assert!(GameStatus::Draw.is_terminal());
        assert!(!GameStatus::Alive.is_terminal());
    }
}
