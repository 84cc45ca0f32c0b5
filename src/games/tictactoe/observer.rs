//! Notifications pushed from the engine to the presentation layer.
//!
//! Delivery is synchronous and unbuffered: an observer sees exactly the
//! events emitted while it is attached, in emission order.

use super::rules::WinningLine;
use super::{RoundOutcome, Scoreboard, Square};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;

/// Receiver of engine notifications.
///
/// Every method defaults to doing nothing so frontends only implement
/// what they render.
pub trait Observer {
    /// A cell was written or cleared.
    fn cell_changed(&mut self, _index: usize, _square: Square) {}

    /// The status line changed.
    fn status_changed(&mut self, _text: &str) {}

    /// The scoreboard changed.
    fn score_changed(&mut self, _scoreboard: &Scoreboard) {}

    /// The round reached a win or a draw.
    fn round_ended(&mut self, _outcome: &RoundOutcome, _line: Option<WinningLine>) {}
}

/// Observer that discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Owned form of an observer callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// See [`Observer::cell_changed`].
    CellChanged {
        /// Board index (0-8).
        index: usize,
        /// New contents.
        square: Square,
    },
    /// See [`Observer::status_changed`].
    StatusChanged(String),
    /// See [`Observer::score_changed`].
    ScoreChanged(Scoreboard),
    /// See [`Observer::round_ended`].
    RoundEnded {
        /// How the round ended.
        outcome: RoundOutcome,
        /// The completed line, for wins.
        line: Option<WinningLine>,
    },
}

/// Forwards notifications into a channel.
///
/// A closed receiver is not an error; the frontend simply stopped listening.
impl Observer for mpsc::UnboundedSender<Notification> {
    fn cell_changed(&mut self, index: usize, square: Square) {
        let _ = self.send(Notification::CellChanged { index, square });
    }

    fn status_changed(&mut self, text: &str) {
        let _ = self.send(Notification::StatusChanged(text.to_string()));
    }

    fn score_changed(&mut self, scoreboard: &Scoreboard) {
        let _ = self.send(Notification::ScoreChanged(*scoreboard));
    }

    fn round_ended(&mut self, outcome: &RoundOutcome, line: Option<WinningLine>) {
        let _ = self.send(Notification::RoundEnded {
            outcome: *outcome,
            line,
        });
    }
}

/// Records notifications for later inspection.
///
/// Clones share the same log, so a test can hand one clone to the engine
/// and read through another.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Notification>>>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn events(&self) -> Vec<Notification> {
        self.log().clone()
    }

    /// Removes and returns everything recorded so far.
    pub fn drain(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.log())
    }

    fn push(&self, notification: Notification) {
        self.log().push(notification);
    }

    /// A panic while recording leaves the log intact, so poisoning is ignored.
    fn log(&self) -> MutexGuard<'_, Vec<Notification>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Observer for Recorder {
    fn cell_changed(&mut self, index: usize, square: Square) {
        self.push(Notification::CellChanged { index, square });
    }

    fn status_changed(&mut self, text: &str) {
        self.push(Notification::StatusChanged(text.to_string()));
    }

    fn score_changed(&mut self, scoreboard: &Scoreboard) {
        self.push(Notification::ScoreChanged(*scoreboard));
    }

    fn round_ended(&mut self, outcome: &RoundOutcome, line: Option<WinningLine>) {
        self.push(Notification::RoundEnded {
            outcome: *outcome,
            line,
        });
    }
}
