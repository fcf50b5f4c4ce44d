//! Match configuration: which strategy drives each mark.

use crate::strategies::StrategyKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for one match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Strategy driving `X`.
    #[serde(default = "default_player_a")]
    player_a: StrategyKind,

    /// Strategy driving `O`.
    #[serde(default = "default_player_b")]
    player_b: StrategyKind,

    /// Predictor table used by model players.
    #[serde(default)]
    model_path: Option<PathBuf>,
}

fn default_player_a() -> StrategyKind {
    StrategyKind::Human
}

fn default_player_b() -> StrategyKind {
    StrategyKind::Heuristic
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_a: default_player_a(),
            player_b: default_player_b(),
            model_path: None,
        }
    }
}

impl MatchConfig {
    /// Creates a new match configuration.
    pub fn new(
        player_a: StrategyKind,
        player_b: StrategyKind,
        model_path: Option<PathBuf>,
    ) -> Self {
        Self {
            player_a,
            player_b,
            model_path,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse config: {}", e))
        })?;

        info!(
            player_a = %config.player_a,
            player_b = %config.player_b,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Replaces any field for which an override is given.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        player_a: Option<StrategyKind>,
        player_b: Option<StrategyKind>,
        model_path: Option<PathBuf>,
    ) -> Self {
        if let Some(kind) = player_a {
            self.player_a = kind;
        }
        if let Some(kind) = player_b {
            self.player_b = kind;
        }
        if model_path.is_some() {
            self.model_path = model_path;
        }
        self
    }

    /// Checks that every model player has a predictor to load.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let wants_model = [self.player_a, self.player_b].contains(&StrategyKind::Model);
        if wants_model && self.model_path.is_none() {
            return Err(ConfigError::new(
                "A model player needs a model file (set model_path or pass --model)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
