/// Trait for providing training data, abstracting over files on disk and built-in fixtures
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::DataError;
use crate::fixtures;
use crate::insight::Answer;
use crate::puzzle::{Puzzle, PuzzleSet};

/// Source of puzzles and insight answers
#[async_trait]
pub trait TrainingDataProvider: Send + Sync {
    /// Get every puzzle to train on
    async fn puzzles(&self) -> Result<Vec<Puzzle>, DataError>;

    /// Get the insight answer with its sampled games
    async fn insight(&self) -> Result<Answer, DataError>;

    /// Get the puzzles as a validated set
    async fn puzzle_set(&self) -> Result<PuzzleSet, DataError> {
        Ok(PuzzleSet::new(self.puzzles().await?)?)
    }
}

/// Reads JSON files, using the built-in data for any file not configured
pub struct FileProvider {
    puzzles_file: Option<PathBuf>,
    games_file: Option<PathBuf>,
}

impl FileProvider {
    pub fn new(puzzles_file: Option<PathBuf>, games_file: Option<PathBuf>) -> Self {
        Self {
            puzzles_file,
            games_file,
        }
    }
}

#[async_trait]
impl TrainingDataProvider for FileProvider {
    async fn puzzles(&self) -> Result<Vec<Puzzle>, DataError> {
        match &self.puzzles_file {
            Some(path) => read_json(path).await,
            None => FixtureProvider.puzzles().await,
        }
    }

    async fn insight(&self) -> Result<Answer, DataError> {
        match &self.games_file {
            Some(path) => read_json(path).await,
            None => FixtureProvider.insight().await,
        }
    }
}

/// Provider that returns fixture data without touching the disk
pub struct FixtureProvider;

#[async_trait]
impl TrainingDataProvider for FixtureProvider {
    async fn puzzles(&self) -> Result<Vec<Puzzle>, DataError> {
        info!("FixtureProvider: Returning sample puzzles");
        Ok(fixtures::sample_puzzles())
    }

    async fn insight(&self) -> Result<Answer, DataError> {
        info!("FixtureProvider: Returning sample games");
        Ok(Answer {
            games: fixtures::sample_games(),
        })
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    info!("Loading {}", path.display());
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DataError::Io {
            path: path.display().to_string(),
            source,
        })?;
    serde_json::from_str(&content).map_err(|source| DataError::Parse {
        path: path.display().to_string(),
        source,
    })
}
