//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the round is live,
/// the player to move must follow from the history's parity. A finished
/// round leaves the last mover as current player.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        let alternates = history.iter().enumerate().all(|(ply, mov)| {
            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            mov.player == expected
        });
        if !alternates {
            return false;
        }

        match history.last() {
            Some(last) if !engine.is_active() => engine.current_player() == last.player,
            _ => {
                let expected_next = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                engine.current_player() == expected_next
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
