//! JSON file DocumentStore
//!
//! Persists the whole document as one pretty-printed JSON file. Reads
//! deserialize fresh from disk on every call; writes replace the file. No
//! locking - concurrent writers race and the last one wins, which is
//! acceptable at demo scale.

use std::fs;
use std::path::PathBuf;

use crate::domain::entities::Document;
use crate::domain::ports::DocumentStore;
use crate::error::{PomadeError, PomadeResult};
use crate::infrastructure::seed;

/// JSON-file-backed document store
pub struct JsonDocumentStore {
    path: PathBuf,
}

impl JsonDocumentStore {
    /// Store at the default location (see [`default_store_path`])
    pub fn new() -> Self {
        Self {
            path: default_store_path(),
        }
    }

    /// Store at an explicit path (tests, `--path` overrides)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Default for JsonDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for JsonDocumentStore {
    fn read(&self) -> PomadeResult<Document> {
        if !self.path.exists() {
            // First run without `pomade init`: serve the seed data. The file
            // is only created once something is written.
            return Ok(seed::seed_document());
        }

        let content = fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| PomadeError::StoreCorrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    fn write(&self, document: &Document) -> PomadeResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(document)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Default data file location (`~/.pomade/db.json`)
///
/// `POMADE_DB_PATH` overrides it, which is how tests isolate themselves.
pub fn default_store_path() -> PathBuf {
    if let Ok(path) = std::env::var("POMADE_DB_PATH") {
        return PathBuf::from(path);
    }
    dirs::home_dir()
        .map(|h| h.join(".pomade/db.json"))
        .unwrap_or_else(|| PathBuf::from(".pomade/db.json"))
}
