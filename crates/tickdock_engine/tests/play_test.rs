//! Full games played through the engine.

use tickdock_engine::{
    GameEngine, GameError, GameState, GameStatus, Move, Player, check_invariants,
};

fn play(moves: &[(i32, i32)]) -> GameEngine {
    let mut engine = GameEngine::new();
    engine.reset();
    for &(x, y) in moves {
        let state = engine.apply_move(x, y).expect("scripted move should be legal");
        assert!(check_invariants(&state).is_ok());
    }
    engine
}

#[test]
fn test_player_one_wins_on_last_cell() {
    let engine = play(&[
        (1, 1),
        (0, 1),
        (1, 0),
        (1, 2),
        (0, 2),
        (2, 0),
        (2, 2),
        (2, 1),
        (0, 0),
    ]);

    let state = engine.state();
    assert_eq!(state.board().values(), [[1, 2, 1], [1, 1, 2], [2, 2, 1]]);
    assert_eq!(state.current_player(), Player::One);
    assert_eq!(state.move_count(), 9);
    assert_eq!(state.status(), GameStatus::Ended);
}

#[test]
fn test_player_two_wins_early() {
    let engine = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 0), (2, 1)]);

    let state = engine.state();
    assert_eq!(state.board().values(), [[1, 2, 1], [0, 2, 0], [1, 2, 0]]);
    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(state.move_count(), 6);
    assert_eq!(state.status(), GameStatus::Ended);
}

#[test]
fn test_draw() {
    let engine = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 1),
        (2, 0),
        (1, 2),
    ]);

    let state = engine.state();
    assert_eq!(state.board().values(), [[1, 2, 1], [2, 1, 1], [2, 1, 2]]);
    assert_eq!(state.current_player(), Player::One);
    assert_eq!(state.move_count(), 9);
    assert_eq!(state.status(), GameStatus::Draw);
}

#[test]
fn test_moves_after_win_rejected_without_mutation() {
    let mut engine = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 0), (2, 1)]);
    let frozen = engine.state();

    for (x, y) in [(1, 0), (2, 2), (0, 0), (5, 5)] {
        assert_eq!(engine.apply_move(x, y), Err(GameError::GameOver));
        assert_eq!(engine.state(), frozen);
    }
}

#[test]
fn test_moves_after_draw_rejected_without_mutation() {
    let mut engine = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (1, 1),
        (2, 2),
        (2, 1),
        (2, 0),
        (1, 2),
    ]);
    let frozen = engine.state();

    assert_eq!(engine.apply_move(0, 0), Err(GameError::GameOver));
    assert_eq!(engine.apply_move(-1, 0), Err(GameError::GameOver));
    assert_eq!(engine.state(), frozen);
    assert_eq!(engine.state().move_count(), 9);
}

#[test]
fn test_rejected_moves_do_not_count() {
    let mut engine = GameEngine::new();
    engine.apply_move(1, 1).unwrap();
    assert!(engine.apply_move(1, 1).is_err());
    assert!(engine.apply_move(-1, 2).is_err());
    assert!(engine.apply_move(0, 9).is_err());

    let state = engine.state();
    assert_eq!(state.move_count(), 1);
    assert_eq!(state.current_player(), Player::Two);
    assert_eq!(state.status(), GameStatus::Alive);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut engine = play(&[(0, 0), (0, 1), (0, 2), (1, 1), (2, 0), (2, 1)]);
    assert_eq!(engine.reset(), GameState::new());
    assert_eq!(engine.state().board().values(), [[0; 3]; 3]);
    assert_eq!(engine.state().current_player(), Player::One);
}

#[test]
fn test_play_all_replays_scenario() {
    let moves: Vec<Move> = [(0, 0), (0, 1), (0, 2), (1, 1), (2, 0), (2, 1)]
        .into_iter()
        .map(Move::from)
        .collect();

    let mut engine = GameEngine::new();
    let state = engine.play_all(&moves).unwrap();
    assert_eq!(state.status(), GameStatus::Ended);
    assert_eq!(state.current_player(), Player::Two);
}
