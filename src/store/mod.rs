// Local JSON persistence for the park catalog and the config document
//
// Policy differs per file:
// - catalog: absent -> empty, anything unreadable or malformed -> StoreError
// - config: absent or unparsable -> empty config (low stakes)

pub mod catalog;
pub mod config;
pub mod error;
pub mod paths;
pub mod schema;

pub use catalog::CatalogStore;
pub use config::ConfigStore;
pub use error::StoreError;
pub use paths::DataPaths;
pub use schema::{park_number, Config, Park};

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serialize `value` as 4-space indented JSON and replace `path` with it.
///
/// The document is written to a sibling temp file first and renamed over the
/// target, so a crash mid-write leaves the previous file intact.
pub(crate) fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    fs::write(&tmp, &buf).map_err(io_err)?;
    fs::rename(&tmp, path).map_err(io_err)?;
    Ok(())
}
