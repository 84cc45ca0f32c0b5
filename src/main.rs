//! Tictactoe - terminal frontend
//!
//! Thin caller around the engine: reads commands from stdin, renders
//! notifications to stdout.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_engine::{EngineConfig, GameMode};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            mode,
            config,
            seed,
            delay_ms,
        } => run_play(config, mode, seed, delay_ms).await,
        Command::Config { config } => print_config(config),
    }
}

/// Run an interactive session
#[instrument]
async fn run_play(
    config_path: Option<PathBuf>,
    mode: Option<GameMode>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if let Some(mode) = mode {
        config = config.with_mode(mode);
    }
    if seed.is_some() {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = delay_ms {
        config = config.with_computer_delay_ms(delay_ms);
    }

    info!(?config, "Starting session");
    tui::run(config).await
}

/// Print the effective configuration
fn print_config(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config(config_path)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    print!("{}", rendered);
    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<EngineConfig> {
    EngineConfig::resolve(path.as_deref()).context("Failed to load configuration")
}
