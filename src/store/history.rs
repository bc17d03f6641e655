use crate::errors::AppResult;
use crate::models::StateMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON map FlightKey → TrackedState, replaced wholesale on every run.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Empty map when no file exists yet; corrupted content is an error.
    pub fn load(&self) -> AppResult<StateMap> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no previous flight state");
            return Ok(StateMap::new());
        }
        let content = fs::read_to_string(&self.path)?;
        let map: StateMap = serde_json::from_str(&content)?;
        debug!(entries = map.len(), "loaded previous flight state");
        Ok(map)
    }

    pub fn save(&self, map: &StateMap) -> AppResult<()> {
        let json = serde_json::to_vec(map)?;
        super::write_atomic(&self.path, &json)?;
        debug!(entries = map.len(), "saved flight state");
        Ok(())
    }
}
