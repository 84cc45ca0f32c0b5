//! Text rendering of the board and notifications.

use tictactoe_engine::{Board, GameMode, Notification, RoundOutcome, Scoreboard};

/// Renders the board with a header naming the mode.
pub fn render_board(board: &Board, mode: GameMode) -> String {
    format!("\n[{}]\n{}\n", mode_label(mode), board.display())
}

fn mode_label(mode: GameMode) -> &'static str {
    match mode {
        GameMode::HumanVsHuman => "Human vs Human",
        GameMode::HumanVsComputer => "Human vs Computer",
    }
}

/// Renders the score line.
pub fn render_score(score: &Scoreboard) -> String {
    format!("Score  {}", score)
}

/// Renders a notification as a line of text.
///
/// Cell changes return `None`: the board is redrawn as a whole instead.
pub fn render_notification(notification: &Notification) -> Option<String> {
    match notification {
        Notification::CellChanged { .. } => None,
        Notification::StatusChanged(text) => Some(text.clone()),
        Notification::ScoreChanged(score) => Some(render_score(score)),
        Notification::RoundEnded {
            outcome: RoundOutcome::Win(player, _),
            line: Some(line),
        } => Some(format!("Three in a row for {} on cells {}", player, one_based(line.indices()))),
        Notification::RoundEnded { .. } => None,
    }
}

fn one_based(indices: [usize; 3]) -> String {
    indices
        .iter()
        .map(|i| (i + 1).to_string())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::{LINES, Player, Square};

    #[test]
    fn test_cell_changes_are_silent() {
        let n = Notification::CellChanged {
            index: 0,
            square: Square::Occupied(Player::X),
        };
        assert_eq!(render_notification(&n), None);
    }

    #[test]
    fn test_win_line_is_one_based() {
        let n = Notification::RoundEnded {
            outcome: RoundOutcome::Win(Player::O, LINES[6]),
            line: Some(LINES[6]),
        };
        assert_eq!(
            render_notification(&n).unwrap(),
            "Three in a row for O on cells 1-5-9"
        );
    }

    #[test]
    fn test_status_passes_through() {
        let n = Notification::StatusChanged("Player X's turn".into());
        assert_eq!(render_notification(&n).unwrap(), "Player X's turn");
    }
}
