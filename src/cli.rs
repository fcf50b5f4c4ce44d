//! Command-line interface for strictly_noughts.

use clap::Parser;
use std::path::PathBuf;
use strictly_noughts::StrategyKind;

/// Strictly Noughts - noughts and crosses against a person, a heuristic or a model
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Play noughts and crosses in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Match configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Strategy for X: human, heuristic or model
    #[arg(long)]
    pub player_a: Option<StrategyKind>,

    /// Strategy for O: human, heuristic or model
    #[arg(long)]
    pub player_b: Option<StrategyKind>,

    /// Predictor table (JSON) for model players
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
