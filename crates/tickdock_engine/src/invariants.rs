//! First-class invariants over game state.
//!
//! Invariants are logical properties that must hold after every engine
//! operation. They are testable on their own and checked with
//! `debug_assert!` after each mutation.

use crate::types::{GameState, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the move counter equals the number of occupied cells.
pub struct MoveCountMatchesBoard;

impl Invariant<GameState> for MoveCountMatchesBoard {
    fn holds(state: &GameState) -> bool {
        usize::from(state.move_count()) == state.board().occupied_count()
    }

    fn description() -> &'static str {
        "Move count equals occupied cells"
    }
}

/// Invariant: player 1 holds the same number of cells as player 2, or one more.
pub struct MarksAlternate;

impl Invariant<GameState> for MarksAlternate {
    fn holds(state: &GameState) -> bool {
        let ones = state.board().count_of(Player::One);
        let twos = state.board().count_of(Player::Two);
        ones == twos || ones == twos + 1
    }

    fn description() -> &'static str {
        "Marks alternate starting with player 1"
    }
}

/// Invariant: the current player follows from the board.
///
/// While the game is alive the current player is the one due to move. Once
/// it is over the current player is whoever made the last move.
pub struct TurnMatchesBoard;

impl Invariant<GameState> for TurnMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let ones = state.board().count_of(Player::One);
        let twos = state.board().count_of(Player::Two);
        let due = if ones > twos { Player::Two } else { Player::One };

        if state.status().is_terminal() {
            state.move_count() > 0 && state.current_player() == due.opponent()
        } else {
            state.current_player() == due
        }
    }

    fn description() -> &'static str {
        "Current player matches the marks on the board"
    }
}

/// All invariants the engine maintains.
pub type GameInvariants = (MoveCountMatchesBoard, MarksAlternate, TurnMatchesBoard);

/// Checks every engine invariant, logging any violation.
#[instrument(skip(state))]
pub fn check_invariants(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(state).inspect_err(|violations| {
        for violation in violations {
            warn!(description = %violation.description, "Invariant violated");
        }
    })
}

/// Asserts that all invariants hold (panics on violation in debug builds).
pub fn assert_invariants(state: &GameState) {
    debug_assert!(
        check_invariants(state).is_ok(),
        "Game invariants violated: {state:?}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, GameStatus};

    fn state(values: [[u8; 3]; 3], player: Player, moves: u8, status: GameStatus) -> GameState {
        GameState::from_parts(Board::from_values(values).unwrap(), player, moves, status)
    }

    #[test]
    fn test_fresh_state_holds() {
        assert!(check_invariants(&GameState::new()).is_ok());
    }

    #[test]
    fn test_mid_game_holds() {
        let s = state([[1, 2, 0], [0, 1, 0], [0, 0, 0]], Player::Two, 3, GameStatus::Alive);
        assert!(check_invariants(&s).is_ok());
    }

    #[test]
    fn test_won_game_keeps_winner_current() {
        let s = state([[1, 2, 1], [0, 2, 0], [1, 2, 0]], Player::Two, 6, GameStatus::Ended);
        assert!(check_invariants(&s).is_ok());

        let s = state([[1, 2, 1], [0, 2, 0], [1, 2, 0]], Player::One, 6, GameStatus::Ended);
        let violations = check_invariants(&s).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, TurnMatchesBoard::description());
    }

    #[test]
    fn test_move_count_mismatch_detected() {
        let s = state([[1, 0, 0], [0, 0, 0], [0, 0, 0]], Player::Two, 2, GameStatus::Alive);
        assert!(!MoveCountMatchesBoard::holds(&s));
    }

    #[test]
    fn test_extra_marks_detected() {
        let s = state([[2, 2, 0], [0, 0, 0], [0, 0, 0]], Player::One, 2, GameStatus::Alive);
        assert!(!MarksAlternate::holds(&s));
        assert!(MoveCountMatchesBoard::holds(&s));
    }
}
