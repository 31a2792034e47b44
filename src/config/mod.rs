//! Configuration
//!
//! Optional `pomade.toml` in the working directory:
//!
//! ```toml
//! latency_ms = 300
//!
//! [store]
//! path = "/tmp/pomade-db.json"
//! ```
//!
//! Everything has a sensible default; a missing file is not an error. The
//! `POMADE_DB_PATH` environment variable beats the configured store path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::PomadeResult;

pub const CONFIG_FILE_NAME: &str = "pomade.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Fixed artificial latency applied to every resolver call, in ms
    #[serde(default)]
    pub latency_ms: u64,

    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Data file location; defaults to `~/.pomade/db.json`
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load config from an explicit file path
    pub fn load(path: &Path) -> PomadeResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `pomade.toml` from a directory, falling back to defaults
    ///
    /// A malformed file is reported once on stderr and then ignored, so a
    /// broken config never blocks the demo.
    pub fn load_or_default(dir: Option<&Path>) -> Self {
        let path = dir
            .map(|d| d.join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_file_missing() {
        let dir = tempdir().unwrap();
        let config = Config::load_or_default(Some(dir.path()));
        assert_eq!(config.latency_ms, 0);
        assert!(config.store.path.is_none());
    }

    #[test]
    fn loads_store_path_and_latency() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "latency_ms = 250\n\n[store]\npath = \"/tmp/db.json\"\n",
        )
        .unwrap();

        let config = Config::load_or_default(Some(dir.path()));
        assert_eq!(config.latency_ms, 250);
        assert_eq!(config.store.path, Some(PathBuf::from("/tmp/db.json")));
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "latency_ms = = =").unwrap();

        let config = Config::load_or_default(Some(dir.path()));
        assert_eq!(config.latency_ms, 0);
    }
}
