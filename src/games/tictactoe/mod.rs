//! Tic-tac-toe: board and rules, the computer opponent, and the session engine.

mod action;
pub mod ai;
mod engine;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod schedule;
mod types;

pub use action::{Move, MoveError};
pub use engine::{DRAW_STATUS, GameEngine, turn_status, win_status};
pub use observer::{Notification, NullObserver, Observer, Recorder};
pub use position::Position;
pub use rules::{LINES, WinningLine};
pub use schedule::{ScheduledMove, play_scheduled};
pub use types::{Board, BoardParseError, GameMode, Player, RoundOutcome, Scoreboard, Square};
