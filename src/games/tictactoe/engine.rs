//! The tic-tac-toe game engine.
//!
//! [`GameEngine`] owns one session: the board, whose turn it is, the mode,
//! and the scoreboard. Callers drive it with [`GameEngine::request_move`],
//! [`GameEngine::set_mode`] and [`GameEngine::reset_round`]; every visible
//! change is pushed synchronously to the attached [`Observer`].

use super::action::{Move, MoveError};
use super::ai::{self, Tactic};
use super::invariants::{EngineInvariants, InvariantSet};
use super::observer::{NullObserver, Observer};
use super::rules;
use super::schedule::ScheduledMove;
use super::{Board, GameMode, Player, Position, RoundOutcome, Scoreboard, Square};
use crate::config::EngineConfig;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Status line for the player to move.
pub fn turn_status(player: Player) -> String {
    format!("Player {}'s turn", player)
}

/// Status line for a won round.
pub fn win_status(player: Player) -> String {
    format!("Player {} wins!", player)
}

/// Status line for a drawn round.
pub const DRAW_STATUS: &str = "Game ended in a draw!";

/// A tic-tac-toe session: board, turn, mode and scores.
pub struct GameEngine {
    board: Board,
    current_player: Player,
    mode: GameMode,
    active: bool,
    scoreboard: Scoreboard,
    history: Vec<Move>,
    /// Seat the computer plays this session.
    computer: Player,
    /// Seat from config; restored on every mode switch.
    default_computer: Player,
    /// Bumped on every reset; stale tickets carry an older value.
    generation: u64,
    computer_delay: Duration,
    pending: Option<ScheduledMove>,
    rng: ChaCha8Rng,
    observer: Box<dyn Observer + Send>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("board", &self.board)
            .field("current_player", &self.current_player)
            .field("mode", &self.mode)
            .field("active", &self.active)
            .field("scoreboard", &self.scoreboard)
            .field("computer", &self.computer)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(&EngineConfig::default(), Box::new(NullObserver))
    }
}

impl GameEngine {
    /// Creates an engine with X to move on an empty board.
    ///
    /// The observer sees nothing for construction itself. If the config
    /// starts in computer mode with the computer on X, the opening move is
    /// left as a scheduled ticket.
    #[instrument(skip(observer))]
    pub fn new(config: &EngineConfig, observer: Box<dyn Observer + Send>) -> Self {
        let rng = match config.seed() {
            Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut engine = Self {
            board: Board::new(),
            current_player: Player::X,
            mode: *config.mode(),
            active: true,
            scoreboard: Scoreboard::new(),
            history: Vec::new(),
            computer: *config.computer_player(),
            default_computer: *config.computer_player(),
            generation: 0,
            computer_delay: config.computer_delay(),
            pending: None,
            rng,
            observer,
        };
        engine.schedule_if_computer_turn();
        engine
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (or the last mover once the round ended).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the active mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the session scoreboard.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    /// Returns the moves of the current round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the seat the computer plays in computer mode.
    pub fn computer_player(&self) -> Player {
        self.computer
    }

    /// Returns the current round generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if the computer owns the current turn.
    pub fn is_computer_turn(&self) -> bool {
        self.active && self.mode == GameMode::HumanVsComputer && self.current_player == self.computer
    }

    /// Classifies the current board.
    ///
    /// Pure: scoring and notifications happen when a move ends the round.
    pub fn evaluate_terminal(&self) -> RoundOutcome {
        rules::evaluate(&self.board)
    }

    // ─────────────────────────────────────────────────────────────
    //  Moves
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Returns false, leaving all state untouched, if the round is over,
    /// the index is out of range or the cell is taken.
    pub fn request_move(&mut self, index: usize) -> bool {
        self.try_move(index).is_ok()
    }

    /// Places the current player's mark at `index`, reporting why a move
    /// was refused.
    #[instrument(skip(self), fields(player = %self.current_player, generation = self.generation))]
    pub fn try_move(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        if !self.active {
            debug!("Rejected move: round is over");
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or_else(|| {
            debug!("Rejected move: out of bounds");
            MoveError::OutOfBounds(index)
        })?;
        if !self.board.is_empty(position) {
            debug!(%position, "Rejected move: square occupied");
            return Err(MoveError::SquareOccupied(position));
        }

        let outcome = self.place(position);
        if !outcome.is_terminal() {
            self.schedule_if_computer_turn();
        }
        Ok(outcome)
    }

    /// Picks the computer's move for the current board without playing it.
    ///
    /// Returns `None` only when the board is full.
    pub fn compute_computer_move(&mut self) -> Option<Position> {
        self.choose_computer_move().map(|(position, _)| position)
    }

    fn choose_computer_move(&mut self) -> Option<(Position, Tactic)> {
        ai::choose_move(&self.board, self.computer, &mut self.rng)
    }

    /// Takes the pending computer-move ticket, if any.
    pub fn take_scheduled_move(&mut self) -> Option<ScheduledMove> {
        self.pending.take()
    }

    /// Plays a ticket from [`take_scheduled_move`](Self::take_scheduled_move).
    ///
    /// Stale tickets (issued before a reset, or overtaken by another move)
    /// are discarded and return false.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn run_scheduled_move(&mut self, ticket: ScheduledMove) -> bool {
        if ticket.generation() != self.generation || ticket.ply() != self.history.len() {
            debug!("Discarding stale computer move");
            return false;
        }
        if !self.is_computer_turn() {
            debug!("Discarding computer move: not the computer's turn");
            return false;
        }
        self.play_computer_move()
    }

    fn play_computer_move(&mut self) -> bool {
        match self.choose_computer_move() {
            Some((position, tactic)) => {
                debug!(%position, %tactic, computer = %self.computer, "Computer moves");
                self.place(position);
                true
            }
            None => false,
        }
    }

    fn schedule_if_computer_turn(&mut self) {
        if self.is_computer_turn() {
            let ticket = ScheduledMove::new(self.generation, self.history.len(), self.computer_delay);
            debug!(?ticket, "Scheduled computer move");
            self.pending = Some(ticket);
        }
    }

    /// Writes the current player's mark and settles the consequences.
    fn place(&mut self, position: Position) -> RoundOutcome {
        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        self.pending = None;
        self.observer
            .cell_changed(position.to_index(), Square::Occupied(player));

        let outcome = self.evaluate_terminal();
        match outcome {
            RoundOutcome::InProgress => {
                self.current_player = player.opponent();
                self.observer.status_changed(&turn_status(self.current_player));
            }
            RoundOutcome::Win(winner, line) => {
                self.active = false;
                self.scoreboard.record_win(winner);
                info!(%winner, %line, score = %self.scoreboard, "Round won");
                self.observer.round_ended(&outcome, Some(line));
                self.observer.status_changed(&win_status(winner));
                self.observer.score_changed(&self.scoreboard);
            }
            RoundOutcome::Draw => {
                self.active = false;
                self.scoreboard.record_draw();
                info!(score = %self.scoreboard, "Round drawn");
                self.observer.round_ended(&outcome, None);
                self.observer.status_changed(DRAW_STATUS);
                self.observer.score_changed(&self.scoreboard);
            }
        }

        debug_assert!(
            EngineInvariants::check_all(&*self).is_ok(),
            "engine invariants violated after {:?}",
            self.history.last()
        );
        outcome
    }

    // ─────────────────────────────────────────────────────────────
    //  Round and mode control
    // ─────────────────────────────────────────────────────────────

    /// Starts a new round, optionally zeroing the scoreboard.
    ///
    /// Cancels any pending computer move. In computer mode with the
    /// computer on X, its opening move is scheduled with the usual delay.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset_round(&mut self, keep_scores: bool) {
        self.clear_round();
        if !keep_scores {
            self.scoreboard = Scoreboard::new();
            self.observer.score_changed(&self.scoreboard);
        }
        self.observer.status_changed(&turn_status(self.current_player));
        self.schedule_if_computer_turn();
    }

    /// Switches mode and starts a new round, keeping scores.
    ///
    /// Entering computer mode from human mode while O is to move in a live
    /// round hands the new round's opening to the computer, which takes the
    /// X seat. A finished round leaves the configured seat in place. Whenever the
    /// computer holds X after the switch it opens immediately, without the
    /// scheduled delay.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: GameMode) {
        let computer_inherits_turn = mode == GameMode::HumanVsComputer
            && self.mode != GameMode::HumanVsComputer
            && self.active
            && self.current_player == Player::O;

        self.mode = mode;
        self.computer = if computer_inherits_turn {
            Player::X
        } else {
            self.default_computer
        };
        info!(%mode, computer = %self.computer, "Mode switched");

        self.clear_round();
        self.observer.status_changed(&turn_status(self.current_player));
        if self.is_computer_turn() {
            self.play_computer_move();
        }
    }

    fn clear_round(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_player = Player::X;
        self.active = true;
        self.pending = None;
        self.generation += 1;
        for index in 0..9 {
            self.observer.cell_changed(index, Square::Empty);
        }
    }
}
