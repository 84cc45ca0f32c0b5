//! Line-oriented terminal frontend.
//!
//! Reads one command per line from stdin, feeds it to the engine and
//! prints whatever the engine reports. Computer replies wait out their
//! delay while stdin stays live, so a reset typed during the pause
//! cancels the reply.

mod input;
mod ui;

use anyhow::{Context, Result};
use input::Input;
use tictactoe_engine::{EngineConfig, GameEngine, Notification, ScheduledMove, turn_status};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// A computer move waiting for its delay to pass.
struct PendingMove {
    ticket: ScheduledMove,
    due: Instant,
}

/// Runs an interactive session until `q` or end of input.
#[instrument(skip_all)]
pub async fn run(config: EngineConfig) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Notification>();
    let mut engine = GameEngine::new(&config, Box::new(event_tx));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut pending: Option<PendingMove> = None;

    println!("{}", input::HELP);
    println!("{}", ui::render_score(&engine.scoreboard()));
    println!("{}", ui::render_board(engine.board(), engine.mode()));
    println!("{}", turn_status(engine.current_player()));

    loop {
        if let Some(ticket) = engine.take_scheduled_move() {
            debug!(?ticket, "Computer move pending");
            println!("Computer is thinking...");
            pending = Some(PendingMove {
                due: Instant::now() + ticket.delay(),
                ticket,
            });
        }
        let due = pending.as_ref().map(|p| p.due);

        tokio::select! {
            _ = async {
                match due {
                    Some(due) => sleep_until(due).await,
                    None => std::future::pending::<()>().await,
                }
            } => {
                if let Some(PendingMove { ticket, .. }) = pending.take() {
                    engine.run_scheduled_move(ticket);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line.context("Failed to read from stdin")? else {
                    info!("Input closed");
                    break;
                };
                match input::parse(&line) {
                    Some(Input::Quit) => break,
                    Some(Input::Help) => {
                        println!("{}", input::HELP);
                        continue;
                    }
                    Some(Input::Cell(index)) => {
                        if engine.is_computer_turn() {
                            println!("Wait for the computer to move.");
                            continue;
                        }
                        if let Err(e) = engine.try_move(index) {
                            println!("{}", e);
                            continue;
                        }
                    }
                    Some(Input::NewRound) => engine.reset_round(true),
                    Some(Input::ResetAll) => engine.reset_round(false),
                    Some(Input::Mode(mode)) => engine.set_mode(mode),
                    None => {
                        println!("Unrecognised command (h for help)");
                        continue;
                    }
                }
            }
        }

        println!("{}", ui::render_board(engine.board(), engine.mode()));
        while let Ok(notification) = event_rx.try_recv() {
            if let Some(text) = ui::render_notification(&notification) {
                println!("{}", text);
            }
        }
    }

    println!("{}", ui::render_score(&engine.scoreboard()));
    Ok(())
}
