//! Replay scripts loaded from disk.

use std::io::Write;
use tickdock::{OutputFormat, ReplayScript, render, replay};
use tickdock_engine::{GameStatus, Player};

fn write_script(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_and_replay_draw() {
    let file = write_script(
        r#"
moves = [[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [2, 2], [2, 1], [2, 0], [1, 2]]
format = "board"
"#,
    );

    let script = ReplayScript::from_file(file.path()).unwrap();
    assert_eq!(*script.format(), OutputFormat::Board);
    assert!(!*script.stop_on_error());

    let report = replay(&script.to_moves(), *script.stop_on_error());
    assert!(report.rejected.is_empty());
    assert_eq!(report.state.status(), GameStatus::Draw);
    assert_eq!(report.state.current_player(), Player::One);
    assert_eq!(
        report.state.board().values(),
        [[1, 2, 1], [2, 1, 1], [2, 1, 2]]
    );
}

#[test]
fn test_stop_on_error_from_script() {
    let file = write_script(
        r#"
moves = [[1, 1], [1, 1], [0, 0]]
stop_on_error = true
"#,
    );

    let script = ReplayScript::from_file(file.path()).unwrap();
    let report = replay(&script.to_moves(), *script.stop_on_error());
    assert_eq!(report.state.move_count(), 1);
    assert_eq!(report.rejected.len(), 1);
    assert_eq!(
        report.rejected[0].error.to_string(),
        "invalid move: space already taken: [1][1]: 1"
    );
}

#[test]
fn test_json_output_matches_state_shape() {
    let script = ReplayScript::new(vec![[1, 1], [0, 1]]);
    let report = replay(&script.to_moves(), false);
    let text = render(&report.state, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["board"], serde_json::json!([[0, 2, 0], [0, 1, 0], [0, 0, 0]]));
    assert_eq!(value["player"], 1);
    assert_eq!(value["numMoves"], 2);
    assert_eq!(value["status"], "alive");
}

#[test]
fn test_missing_file_is_config_error() {
    let err = ReplayScript::from_file("/nonexistent/tickdock/script.toml").unwrap_err();
    assert!(err.message.contains("Failed to read replay script"));
}
