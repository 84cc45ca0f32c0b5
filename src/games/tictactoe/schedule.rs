//! Delayed computer moves.
//!
//! The engine never sleeps. When a human move hands the turn to the
//! computer it records a [`ScheduledMove`] ticket; the caller waits out the
//! delay and hands the ticket back. A ticket only plays if the round it was
//! issued for is still the current one, so a reset during the delay
//! silently discards it.

use super::GameEngine;
use std::time::Duration;
use tracing::instrument;

/// Ticket for a pending computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct ScheduledMove {
    generation: u64,
    ply: usize,
    delay: Duration,
}

impl ScheduledMove {
    /// Round generation the ticket was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of moves on the board when the ticket was issued.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// How long the caller should wait before playing it.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Waits out the ticket's delay, then plays it.
///
/// Returns whether the computer actually moved.
#[instrument(skip(engine))]
pub async fn play_scheduled(engine: &mut GameEngine, ticket: ScheduledMove) -> bool {
    tokio::time::sleep(ticket.delay()).await;
    engine.run_scheduled_move(ticket)
}
