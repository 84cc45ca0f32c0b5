//! Command-line interface for the tic-tac-toe terminal frontend.

use clap::{Parser, Subcommand};
use tictactoe_engine::GameMode;

/// Tic-tac-toe - play in the terminal against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with score tracking and a simple computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive session
    Play {
        /// Starting mode: "human" or "computer" (overrides config)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Path to a TOML config file (falls back to $TICTACTOE_CONFIG)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the computer's random moves (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Computer thinking delay in milliseconds (overrides config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Path to a TOML config file (falls back to $TICTACTOE_CONFIG)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
