// Data directory layout
// Both files live side by side in one directory (the working directory by default).

use std::path::PathBuf;

pub const PARKS_DATA_FILE: &str = "parks_data.json";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone)]
pub struct DataPaths {
    dir: PathBuf,
}

impl DataPaths {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn catalog_file(&self) -> PathBuf {
        self.dir.join(PARKS_DATA_FILE)
    }

    pub fn config_file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::new(".")
    }
}
