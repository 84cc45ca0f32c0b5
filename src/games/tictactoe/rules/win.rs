//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight index-triples whose uniform occupation ends a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

impl WinningLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if `player` holds all three cells.
    pub fn is_held_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|pos| board.get(*pos) == Square::Occupied(player))
    }
}

impl std::fmt::Display for WinningLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{}-{}-{}", a, b, c)
    }
}

/// Winning lines in scan order: rows, columns, diagonals.
///
/// The order is the tie-break for boards completing more than one line.
pub const LINES: [WinningLine; 8] = {
    use Position::*;
    [
        // Rows
        WinningLine([TopLeft, TopCenter, TopRight]),
        WinningLine([MiddleLeft, Center, MiddleRight]),
        WinningLine([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinningLine([TopLeft, MiddleLeft, BottomLeft]),
        WinningLine([TopCenter, Center, BottomCenter]),
        WinningLine([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinningLine([TopLeft, Center, BottomRight]),
        WinningLine([TopRight, Center, BottomLeft]),
    ]
};

/// Finds the first completed line and its owner.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinningLine)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((player, *line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
