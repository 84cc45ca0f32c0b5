//! Tests for loading engine configuration from disk.

use std::io::Write;
use tictactoe_engine::{EngineConfig, GameEngine, GameMode, NullObserver, Player};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human_vs_computer\"").unwrap();
    writeln!(file, "computer_player = \"X\"").unwrap();
    writeln!(file, "seed = 8").unwrap();

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.mode(), GameMode::HumanVsComputer);
    assert_eq!(*config.computer_player(), Player::X);
    assert_eq!(*config.computer_delay_ms(), 500);
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = 5").unwrap();

    let config = EngineConfig::resolve(Some(file.path())).unwrap();
    assert_eq!(*config.computer_delay_ms(), 5);
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_bad_value_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "computer_player = \"Z\"").unwrap();
    assert!(EngineConfig::from_file(file.path()).is_err());
}

#[test]
fn test_configured_computer_on_x_opens() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "mode = \"human_vs_computer\"").unwrap();
    writeln!(file, "computer_player = \"X\"").unwrap();
    writeln!(file, "computer_delay_ms = 0").unwrap();
    let config = EngineConfig::from_file(file.path()).unwrap();

    let mut engine = GameEngine::new(&config, Box::new(NullObserver));
    let ticket = engine.take_scheduled_move().expect("opening scheduled");
    assert!(engine.run_scheduled_move(ticket));
    assert_eq!(engine.history()[0].player, Player::X);
    assert_eq!(engine.current_player(), Player::O);
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = EngineConfig::default().with_seed(Some(3));
    let text = toml::to_string(&config).unwrap();
    assert_eq!(EngineConfig::from_toml(&text).unwrap(), config);
}
