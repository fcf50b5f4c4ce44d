//! Strictly Noughts - console driver
//!
//! Reads, decides, applies and renders until the game ends, then offers
//! another round.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{self, BufRead, Write};
use std::path::Path;
use strictly_noughts::{
    ConsoleInput, GameEngine, GameStatus, HeuristicStrategy, HumanStrategy, Mark, MatchConfig,
    ModelStrategy, MoveError, MoveStrategy, Outcome, StrategyKind, TablePredictor, TurnOutcome,
    render_board, retry_message,
};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    }
    .with_overrides(cli.player_a, cli.player_b, cli.model.clone());
    config.validate()?;
    info!(?config, "Starting match");

    let mut engine = GameEngine::new(
        build_strategy(*config.player_a(), Mark::PlayerA, &config)?,
        build_strategy(*config.player_b(), Mark::PlayerB, &config)?,
    );

    loop {
        if play_one(&mut engine)?.is_none() {
            println!("\nInput closed. Goodbye!");
            return Ok(());
        }

        if !ask_play_again()? {
            println!("Thank you for playing!");
            return Ok(());
        }
        engine.restart();
    }
}

/// Sets up tracing to stderr, or to a file when one is given.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}

/// Builds the strategy for one player slot.
#[instrument(skip(config))]
fn build_strategy(
    kind: StrategyKind,
    mark: Mark,
    config: &MatchConfig,
) -> Result<Box<dyn MoveStrategy>> {
    let strategy: Box<dyn MoveStrategy> = match kind {
        StrategyKind::Human => Box::new(HumanStrategy::new(
            format!("Human ({mark})"),
            ConsoleInput::new(),
        )),
        StrategyKind::Heuristic => Box::new(HeuristicStrategy::new(format!(
            "Computer ({mark})"
        ))),
        StrategyKind::Model => {
            let path = config
                .model_path()
                .as_ref()
                .context("Model player configured without a model file")?;
            let predictor = TablePredictor::from_file(path)?;
            Box::new(ModelStrategy::new(format!("Computer ({mark})"), predictor))
        }
    };
    debug!(name = %strategy.name(), "Strategy ready");
    Ok(strategy)
}

/// Plays one game to the end and returns its outcome.
///
/// Returns `None` only when input closed mid-game.
fn play_one(engine: &mut GameEngine) -> Result<Option<Outcome>> {
    println!("New Game: X goes first.\n");
    print!("{}", render_board(engine.board()));

    loop {
        let mark = match engine.status() {
            GameStatus::InProgress(mark) => mark,
            GameStatus::Terminal(outcome) => return Ok(Some(outcome)),
        };
        if engine.strategy(mark).kind() != StrategyKind::Human {
            println!("\nComputer ({mark}) is thinking...");
        }

        match engine.step() {
            Ok(TurnOutcome::Placed { status, .. }) => {
                print!("{}", render_board(engine.board()));
                if let GameStatus::Terminal(outcome) = status {
                    println!("\n{outcome}");
                    return Ok(Some(outcome));
                }
            }
            Ok(TurnOutcome::Rejected { error, .. }) => {
                debug!(%error, "Re-prompting");
                println!("{}", retry_message(&error));
            }
            Err(MoveError::InputClosed) => {
                warn!("Input closed mid-game");
                return Ok(None);
            }
            Err(e) => return Err(e).context("Game engine failed"),
        }
    }
}

/// Asks whether to start another game.
fn ask_play_again() -> Result<bool> {
    print!("\nAnother game? Enter Y/y to play again: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut reply = String::new();
    io::stdin()
        .lock()
        .read_line(&mut reply)
        .context("Failed to read reply")?;
    Ok(reply.trim().eq_ignore_ascii_case("y"))
}
