//! Table-backed move predictor loaded from JSON.

use crate::config::ConfigError;
use crate::strategies::Predictor;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// One stored board and the cell index the model plays on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableEntry {
    /// Row-major features, `X` = 1, `O` = -1, empty = 0.
    pub board: Vec<i8>,
    /// Row-major index of the chosen cell.
    pub index: usize,
}

/// Pre-trained lookup model.
///
/// Answers with the index stored for the closest known board, closeness
/// being the number of cells that differ. Ties go to the earlier entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePredictor {
    entries: Vec<TableEntry>,
    #[serde(default)]
    fallback: usize,
}

impl TablePredictor {
    /// Creates a predictor from entries.
    pub fn new(entries: Vec<TableEntry>, fallback: usize) -> Self {
        Self { entries, fallback }
    }

    /// Loads a predictor table from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read model file: {}", e))
        })?;

        let predictor: Self = serde_json::from_str(&content).map_err(|e| {
            ConfigError::new(format!("Failed to parse model file: {}", e))
        })?;

        info!(entries = predictor.entries.len(), "Model loaded successfully");
        Ok(predictor)
    }

    /// Number of stored boards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the table holds no boards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Predictor for TablePredictor {
    fn predict(&self, features: &[i8]) -> usize {
        let nearest = self
            .entries
            .iter()
            .filter(|entry| entry.board.len() == features.len())
            .min_by_key(|entry| {
                entry
                    .board
                    .iter()
                    .zip(features)
                    .filter(|(stored, seen)| stored != seen)
                    .count()
            });

        match nearest {
            Some(entry) => {
                debug!(index = entry.index, "Nearest stored board");
                entry.index
            }
            None => self.fallback,
        }
    }
}
