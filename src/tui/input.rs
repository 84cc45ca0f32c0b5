//! Parsing typed commands.

use tictactoe_engine::{GameMode, Position};

/// A line of user input, interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Play the cell with this board index (typed as 1-9).
    Cell(usize),
    /// Start a new round, keeping scores.
    NewRound,
    /// Start a new round and zero the scores.
    ResetAll,
    /// Switch mode.
    Mode(GameMode),
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Parses one line. Returns `None` for anything unrecognised.
pub fn parse(line: &str) -> Option<Input> {
    let line = line.trim();
    match line {
        "r" | "new" => return Some(Input::NewRound),
        "R" | "reset" => return Some(Input::ResetAll),
        "h" | "?" | "help" => return Some(Input::Help),
        "q" | "quit" | "exit" => return Some(Input::Quit),
        _ => {}
    }

    if let Some(mode) = line.strip_prefix("m ").or_else(|| line.strip_prefix("mode ")) {
        return mode.trim().parse().ok().map(Input::Mode);
    }

    match line.parse::<usize>() {
        Ok(n @ 1..=9) => Some(Input::Cell(n - 1)),
        Ok(_) => None,
        Err(_) => Position::from_label(line).map(|pos| Input::Cell(pos.to_index())),
    }
}

/// Command summary shown on `help`.
pub const HELP: &str = "\
Commands:
  1-9               play that cell (numbered as on the board)
  top-left ...      play a cell by name (center, bottom-right, ...)
  r                 new round (scores kept)
  R                 reset everything (scores zeroed)
  m human|computer  switch mode (starts a new round)
  h                 this help
  q                 quit";
