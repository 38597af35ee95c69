//! Application State
//!
//! Owned by the shell for the lifetime of the process and handed to every
//! command by `&mut`. Single-threaded, so no locking.

use crate::store::{CatalogStore, Config, ConfigStore, DataPaths, Park, StoreError};

/// Application state holding the in-memory catalog, the config document and
/// the stores that persist them
pub struct AppState {
    pub paths: DataPaths,
    pub catalog_store: CatalogStore,
    pub config_store: ConfigStore,
    pub parks: Vec<Park>,
    pub config: Config,
}

impl AppState {
    /// Load both documents from `paths`. Only the catalog can fail.
    pub fn load(paths: DataPaths) -> Result<Self, StoreError> {
        let catalog_store = CatalogStore::new(paths.catalog_file());
        let config_store = ConfigStore::new(paths.config_file());
        let config = config_store.load();
        let parks = catalog_store.load()?;

        Ok(Self {
            paths,
            catalog_store,
            config_store,
            parks,
            config,
        })
    }

    /// Persist the current catalog
    pub fn save_parks(&self) -> Result<(), String> {
        self.catalog_store.save(&self.parks).map_err(|e| e.to_string())
    }

    /// Persist the current config
    pub fn save_config(&self) -> Result<(), String> {
        self.config_store.save(&self.config).map_err(|e| e.to_string())
    }
}
