//! On-disk game cache
//!
//! The cache is one serialized file holding every game seen across runs.
//! `GameStore` is constructed with an explicit path so tests and external
//! callers control the location; nothing is loaded implicitly at startup.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths::get_default_cache_path;
use crate::error::AppError;
use crate::models::GameRecord;

/// Handle to the game cache file.
#[derive(Debug, Clone)]
pub struct GameStore {
    path: PathBuf,
}

impl GameStore {
    /// A store at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GameStore { path: path.into() }
    }

    /// A store at the per-user default location
    /// (`<data dir>/nba/games.json`).
    pub fn open_default() -> Self {
        GameStore::new(get_default_cache_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the cached games.
    ///
    /// A missing cache file is an error here; callers that can proceed
    /// without a cache check [`GameStore::exists`] first.
    pub fn load(&self) -> Result<Vec<GameRecord>, AppError> {
        let content = fs::read_to_string(&self.path)?;
        let games = serde_json::from_str(&content)?;
        Ok(games)
    }

    /// Persists the full game list, overwriting any previous content.
    /// Parent directories are created if absent.
    pub fn save(&self, games: &[GameRecord]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(games)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
