// Park Catalog Store
// Authoritative persisted copy of the catalog, rewritten whole after every change.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::schema::Park;
use super::write_json_pretty;

#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the catalog. A missing file is an empty catalog; a file that is
    /// not a JSON array of park records is an error, never silently dropped.
    pub fn load(&self) -> Result<Vec<Park>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No catalog at {}, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let json_err = |source| StoreError::Json {
            path: self.path.clone(),
            source,
        };

        let value: serde_json::Value = serde_json::from_str(&text).map_err(json_err)?;
        if !value.is_array() {
            return Err(StoreError::NotAnArray {
                path: self.path.clone(),
            });
        }
        let parks: Vec<Park> = serde_json::from_value(value).map_err(json_err)?;
        if let Some(bad) = parks.iter().find(|p| !p.activation_is_consistent()) {
            return Err(StoreError::InconsistentActivation {
                path: self.path.clone(),
                reference: bad.reference.clone(),
            });
        }

        log::info!("Loaded {} parks from {}", parks.len(), self.path.display());
        Ok(parks)
    }

    /// Overwrite the catalog file with `parks`
    pub fn save(&self, parks: &[Park]) -> Result<(), StoreError> {
        write_json_pretty(&self.path, parks)?;
        log::info!("Saved {} parks to {}", parks.len(), self.path.display());
        Ok(())
    }
}
