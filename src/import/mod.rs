// CSV catalog import
//
// The import replaces the catalog wholesale. Activation state is the only
// thing carried over, matched by park reference; parks missing from the new
// export are dropped. Nothing is written here - the caller persists.

pub mod csv;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::store::Park;
use self::csv::{extract_provinces, parse_park_rows, CsvParkRow};

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: ::csv::Error,
    },
}

/// Result of an import: the replacement catalog and how many rows made it in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub parks: Vec<Park>,
    pub count: usize,
}

/// Read a park export from `path` and merge it with `existing`.
/// Any read or parse failure aborts the whole import.
pub fn import_parks(path: &Path, existing: &[Park]) -> Result<ImportOutcome, ImportError> {
    log::info!("Importing parks from {}", path.display());

    let text = fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rows = parse_park_rows(&text).map_err(|source| ImportError::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let outcome = merge_rows(&rows, existing);
    log::info!(
        "Import complete: {} rows read, {} parks imported, {} skipped",
        rows.len(),
        outcome.count,
        rows.len() - outcome.count
    );
    Ok(outcome)
}

/// Build the new catalog from parsed rows, keeping activation state of
/// parks already in `existing`
pub fn merge_rows(rows: &[CsvParkRow], existing: &[Park]) -> ImportOutcome {
    let by_reference: HashMap<&str, &Park> =
        existing.iter().map(|p| (p.reference.as_str(), p)).collect();

    let mut parks = Vec::with_capacity(rows.len());
    for row in rows {
        let Some(row) = row.required() else {
            log::debug!("Skipping incomplete row: {:?}", row);
            continue;
        };

        let mut park = Park::new(row.reference, row.name, extract_provinces(row.location_desc));
        // Only a complete activation (flag and date) carries over
        if let Some(Park { activated: true, activation_time: Some(date), .. }) =
            by_reference.get(row.reference).copied()
        {
            park.activated = true;
            park.activation_time = Some(date.clone());
        }
        parks.push(park);
    }

    let count = parks.len();
    ImportOutcome { parks, count }
}
