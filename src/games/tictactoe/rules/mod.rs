//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]; the engine layers scoring and
//! notifications on top.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, WinningLine, check_winner, winning_line};

use super::{Board, RoundOutcome};

/// Classifies a board as won, drawn or still in progress.
pub fn evaluate(board: &Board) -> RoundOutcome {
    if let Some((player, line)) = winning_line(board) {
        RoundOutcome::Win(player, line)
    } else if is_draw(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}
