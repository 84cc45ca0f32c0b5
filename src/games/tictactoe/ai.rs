//! Simple computer opponent: win if possible, otherwise block, otherwise random.
//!
//! Looks exactly one ply ahead, so correct play beats it.

use super::rules::{LINES, WinningLine};
use super::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Which rule produced the computer's move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Tactic {
    /// Completes the computer's own line.
    Win,
    /// Fills the opponent's open line.
    Block,
    /// Uniform pick among the empty squares.
    Random,
}

/// Returns the empty cell that would complete `line` for `player`.
///
/// Patterns are tried as (a,b)->c, (a,c)->b, (b,c)->a.
fn completing_cell(board: &Board, line: &WinningLine, player: Player) -> Option<Position> {
    let [a, b, c] = line.positions();
    let mine = |pos: Position| board.get(pos) == Square::Occupied(player);

    if mine(a) && mine(b) && board.is_empty(c) {
        Some(c)
    } else if mine(a) && mine(c) && board.is_empty(b) {
        Some(b)
    } else if mine(b) && mine(c) && board.is_empty(a) {
        Some(a)
    } else {
        None
    }
}

/// Finds the first line (in scan order) that `player` can complete this move.
pub fn find_winning_move(board: &Board, player: Player) -> Option<Position> {
    LINES
        .iter()
        .find_map(|line| completing_cell(board, line, player))
}

/// Picks uniformly among the empty squares.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}

/// Chooses a move for `player` and reports the rule that produced it.
///
/// Returns `None` only when the board is full.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    player: Player,
    rng: &mut R,
) -> Option<(Position, Tactic)> {
    let choice = find_winning_move(board, player)
        .map(|pos| (pos, Tactic::Win))
        .or_else(|| find_winning_move(board, player.opponent()).map(|pos| (pos, Tactic::Block)))
        .or_else(|| random_move(board, rng).map(|pos| (pos, Tactic::Random)));

    if let Some((position, tactic)) = choice {
        debug!(%position, %tactic, "Computer chose position");
    }
    choice
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_each_gap_pattern() {
        let line = LINES[0];
        assert_eq!(
            completing_cell(&board("OO.|...|..."), &line, Player::O),
            Some(Position::TopRight)
        );
        assert_eq!(
            completing_cell(&board("O.O|...|..."), &line, Player::O),
            Some(Position::TopCenter)
        );
        assert_eq!(
            completing_cell(&board(".OO|...|..."), &line, Player::O),
            Some(Position::TopLeft)
        );
        assert_eq!(completing_cell(&board("OOX|...|..."), &line, Player::O), None);
    }

    #[test]
    fn test_win_beats_block() {
        // X threatens the top row, O can finish the middle row.
        let b = board("XX.|OO.|X..");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            choose_move(&b, Player::O, &mut rng),
            Some((Position::MiddleRight, Tactic::Win))
        );
    }

    #[test]
    fn test_blocks_opponent() {
        let b = board("XX.|.O.|...");
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            choose_move(&b, Player::O, &mut rng),
            Some((Position::TopRight, Tactic::Block))
        );
    }

    #[test]
    fn test_first_line_in_scan_order_wins_ties() {
        // O can win on the top row or the left column; rows come first.
        let b = board("OO.|...|O.X");
        assert_eq!(find_winning_move(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_random_move_is_empty_square() {
        let b = board("XOX|.O.|X.O");
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            let pos = random_move(&b, &mut rng).unwrap();
            assert!(b.is_empty(pos));
        }
    }

    #[test]
    fn test_random_move_reaches_every_empty_square() {
        let b = Board::new();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[random_move(&b, &mut rng).unwrap().to_index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX|XOO|OXX");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(choose_move(&b, Player::O, &mut rng), None);
    }
}
