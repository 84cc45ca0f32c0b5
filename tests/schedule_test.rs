//! Tests for delayed computer moves.

use std::time::{Duration, Instant};
use tictactoe_engine::{
    EngineConfig, GameEngine, GameMode, Notification, Player, Recorder, play_scheduled,
};

fn computer_engine(delay_ms: u64) -> (GameEngine, Recorder) {
    let recorder = Recorder::new();
    let config = EngineConfig::default()
        .with_seed(Some(17))
        .with_mode(GameMode::HumanVsComputer)
        .with_computer_delay_ms(delay_ms);
    let engine = GameEngine::new(&config, Box::new(recorder.clone()));
    (engine, recorder)
}

#[tokio::test]
async fn test_scheduled_move_plays_after_delay() {
    let (mut engine, _) = computer_engine(20);
    assert!(engine.request_move(4));
    let ticket = engine.take_scheduled_move().expect("reply scheduled");
    assert_eq!(ticket.delay(), Duration::from_millis(20));

    let started = Instant::now();
    assert!(play_scheduled(&mut engine, ticket).await);
    assert!(started.elapsed() >= Duration::from_millis(20));

    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.current_player(), Player::X);
}

#[tokio::test]
async fn test_reset_before_delay_discards_move() {
    let (mut engine, recorder) = computer_engine(0);
    assert!(engine.request_move(4));
    let ticket = engine.take_scheduled_move().unwrap();

    engine.reset_round(true);
    recorder.drain();

    assert!(!play_scheduled(&mut engine, ticket).await);
    assert!(engine.history().is_empty());
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn test_mode_switch_before_delay_discards_move() {
    let (mut engine, _) = computer_engine(0);
    assert!(engine.request_move(4));
    let ticket = engine.take_scheduled_move().unwrap();

    engine.set_mode(GameMode::HumanVsHuman);

    assert!(!play_scheduled(&mut engine, ticket).await);
    assert!(engine.history().is_empty());
}

#[tokio::test]
async fn test_ticket_from_previous_round_cannot_replay() {
    let (mut engine, _) = computer_engine(0);
    assert!(engine.request_move(4));
    let stale = engine.take_scheduled_move().unwrap();

    // Same ply count in the next round must not revive the old ticket.
    engine.reset_round(true);
    assert!(engine.request_move(0));
    let fresh = engine.take_scheduled_move().unwrap();
    assert_ne!(stale.generation(), fresh.generation());
    assert_eq!(stale.ply(), fresh.ply());

    assert!(!play_scheduled(&mut engine, stale).await);
    assert!(play_scheduled(&mut engine, fresh).await);
    assert_eq!(engine.history().len(), 2);
}

#[tokio::test]
async fn test_computer_reply_notifies_observer() {
    let (mut engine, recorder) = computer_engine(0);
    assert!(engine.request_move(0));
    let ticket = engine.take_scheduled_move().unwrap();
    recorder.drain();

    assert!(play_scheduled(&mut engine, ticket).await);

    let events = recorder.events();
    assert!(matches!(
        events.first(),
        Some(Notification::CellChanged { .. })
    ));
    assert_eq!(
        events.last(),
        Some(&Notification::StatusChanged("Player X's turn".to_string()))
    );
}

#[tokio::test]
async fn test_engine_runs_in_spawned_task() {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<Notification>();
    let config = EngineConfig::default()
        .with_seed(Some(17))
        .with_mode(GameMode::HumanVsComputer)
        .with_computer_delay_ms(0);
    let mut engine = GameEngine::new(&config, Box::new(tx));

    let handle = tokio::spawn(async move {
        assert!(engine.request_move(4));
        let ticket = engine.take_scheduled_move().expect("reply scheduled");
        play_scheduled(&mut engine, ticket).await
    });
    assert!(handle.await.unwrap());

    let mut cells = 0;
    while let Ok(notification) = rx.try_recv() {
        if matches!(notification, Notification::CellChanged { .. }) {
            cells += 1;
        }
    }
    assert_eq!(cells, 2);
}
