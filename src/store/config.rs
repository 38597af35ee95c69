// Config Store
// Unlike the catalog, a broken config file is not worth stopping for.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::schema::Config;
use super::write_json_pretty;

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config; absent or unparsable files yield the empty config
    pub fn load(&self) -> Config {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) => {
                log::debug!("No config at {} ({}), using defaults", self.path.display(), e);
                return Config::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(cfg) => cfg,
            Err(e) => {
                log::warn!("Ignoring unreadable config {}: {}", self.path.display(), e);
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), StoreError> {
        write_json_pretty(&self.path, config)
    }
}
