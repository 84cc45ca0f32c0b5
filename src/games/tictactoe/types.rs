//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::WinningLine;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number so the grid doubles
    /// as an input legend.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {}", reason)]
pub struct BoardParseError {
    /// What was wrong with the input.
    pub reason: String,
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells written as `X`, `O` or `.` (or `-`).
    ///
    /// Whitespace and `|` separators are ignored, so `"XO.|...|..X"` and
    /// a multi-line grid both parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut count = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            if count == 9 {
                return Err(BoardParseError {
                    reason: "more than 9 cells".to_string(),
                });
            }
            squares[count] = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '-' => Square::Empty,
                other => {
                    return Err(BoardParseError {
                        reason: format!("unexpected character {:?}", other),
                    });
                }
            };
            count += 1;
        }
        if count != 9 {
            return Err(BoardParseError {
                reason: format!("expected 9 cells, found {}", count),
            });
        }
        Ok(Self { squares })
    }
}

/// Whether both seats are human or one is played by the built-in computer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    #[strum(serialize = "human")]
    HumanVsHuman,
    /// A human plays against the built-in heuristic.
    #[strum(serialize = "computer")]
    HumanVsComputer,
}

/// Win/draw tally for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins = self.x_wins.saturating_add(1),
            Player::O => self.o_wins = self.o_wins.saturating_add(1),
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws = self.draws.saturating_add(1);
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// State of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Round is ongoing.
    InProgress,
    /// Round ended with three in a row.
    Win(Player, WinningLine),
    /// Board filled with no winner.
    Draw,
}

impl RoundOutcome {
    /// Returns true once the round has been decided.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}
