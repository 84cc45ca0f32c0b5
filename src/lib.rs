//! Tic-tac-toe engine with a simple computer opponent.
//!
//! The library is the logic core of a tic-tac-toe game: it owns the board,
//! turn order, mode and scoreboard, and pushes every visible change to an
//! [`Observer`] supplied by the presentation layer.
//!
//! # Architecture
//!
//! - **Rules**: pure win/draw evaluation over the eight fixed lines
//! - **AI**: one-ply heuristic (win, else block, else random)
//! - **Engine**: the session state machine; callers own the instance
//! - **Scheduling**: delayed computer moves as generation-tagged tickets
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{EngineConfig, GameEngine, Player, Recorder, RoundOutcome};
//!
//! let recorder = Recorder::new();
//! let mut engine = GameEngine::new(&EngineConfig::default(), Box::new(recorder.clone()));
//!
//! for index in [0, 3, 1, 4, 2] {
//!     assert!(engine.request_move(index));
//! }
//! assert!(matches!(engine.evaluate_terminal(), RoundOutcome::Win(Player::X, _)));
//! assert_eq!(engine.scoreboard().x_wins(), 1);
//! assert!(!recorder.events().is_empty());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV_VAR, ConfigError, EngineConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, DRAW_STATUS, GameEngine, GameMode, LINES, Move, MoveError,
    Notification, NullObserver, Observer, Player, Position, Recorder, RoundOutcome,
    ScheduledMove, Scoreboard, Square, WinningLine, play_scheduled, turn_status, win_status,
};

// Crate-level exports - Rules, AI and invariants for callers that want them directly
pub use games::tictactoe::{ai, invariants, rules};
