//! History consistency invariant: the board is exactly the replayed history.

use super::super::{Board, GameEngine, Square};
use super::Invariant;

/// Invariant: Replaying the move history onto an empty board reproduces
/// the current board, and no cell is played twice.
///
/// This also gives monotonicity: a cell only changes by being appended to
/// the history, and history only shrinks on reset.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new();
        for mov in engine.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.player));
        }
        &replayed == engine.board()
    }

    fn description() -> &'static str {
        "Board matches replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameMode;

    #[test]
    fn test_holds_through_moves_and_reset() {
        let mut engine = GameEngine::default();
        for index in [4, 0, 8] {
            assert!(engine.request_move(index));
            assert!(HistoryConsistentInvariant::holds(&engine));
        }
        engine.reset_round(true);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_computer_opening() {
        let mut engine = GameEngine::default();
        assert!(engine.request_move(0));
        engine.set_mode(GameMode::HumanVsComputer);
        assert_eq!(engine.history().len(), 1);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }
}
