//! Best-run persistence in a small JSON file

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Failed to access record file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse record file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Longest victory streak across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestRun {
    #[serde(default)]
    pub best_run: u32,
}

impl BestRun {
    /// Load the record; a missing file is an empty record
    pub fn load(path: &Path) -> Result<Self, RecordError> {
        if !path.exists() {
            return Ok(BestRun::default());
        }
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load the record, falling back to an empty one if the file is unreadable
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("ignoring record at {}: {}", path.display(), e);
            BestRun::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), RecordError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Submit a finished streak. Returns true if it set a new record.
    pub fn submit(&mut self, victories: u32) -> bool {
        if victories > self.best_run {
            self.best_run = victories;
            true
        } else {
            false
        }
    }
}
