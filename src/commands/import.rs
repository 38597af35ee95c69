//! CSV import command
//!
//! This module handles:
//! - import_csv: Replace the catalog from a park export, keep activations, persist

use std::path::PathBuf;

use serde::Serialize;

use super::state::AppState;
use crate::import::import_parks;

#[derive(Debug, Serialize)]
pub struct ImportResult {
    /// Rows turned into park records
    pub imported: usize,
    /// Parks in the catalog before the import
    pub previous_total: usize,
    /// Imported parks that kept an earlier activation
    pub activations_kept: usize,
}

pub fn import_csv(state: &mut AppState, path: PathBuf) -> Result<ImportResult, String> {
    // A failed read leaves both the in-memory and persisted catalog alone
    let outcome = import_parks(&path, &state.parks).map_err(|e| e.to_string())?;

    let result = ImportResult {
        imported: outcome.count,
        previous_total: state.parks.len(),
        activations_kept: outcome.parks.iter().filter(|p| p.activated).count(),
    };

    state.parks = outcome.parks;
    state.save_parks()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::state::test_support::{empty_state, state_with};
    use crate::store::{CatalogStore, Park};

    #[test]
    fn test_import_persists_catalog() {
        let (dir, mut state) = empty_state();
        let csv = dir.path().join("parks.csv");
        std::fs::write(&csv, "reference,name,locationDesc\nCN-0012,Test Park,\"Anhui, CN-AH, China\"\n").unwrap();

        let result = import_csv(&mut state, csv).unwrap();
        assert_eq!(result.imported, 1);
        assert_eq!(result.previous_total, 0);

        let saved = CatalogStore::new(state.paths.catalog_file()).load().unwrap();
        assert_eq!(saved, state.parks);
        assert_eq!(saved[0].provinces, vec!["CN-AH"]);
    }

    #[test]
    fn test_failed_import_keeps_catalog() {
        let mut park = Park::new("CN-0001", "Kept", vec![]);
        park.activated = true;
        park.activation_time = Some("2024-01-01".into());
        let (dir, mut state) = state_with(vec![park.clone()]);

        let err = import_csv(&mut state, dir.path().join("missing.csv")).unwrap_err();
        assert!(err.contains("missing.csv"));
        assert_eq!(state.parks, vec![park.clone()]);
        let saved = CatalogStore::new(state.paths.catalog_file()).load().unwrap();
        assert_eq!(saved, vec![park]);
    }

    #[test]
    fn test_activation_survives_reimport() {
        let (dir, mut state) = empty_state();
        let csv = dir.path().join("parks.csv");
        std::fs::write(&csv, "reference,name,locationDesc\nCN-0001,A,CN-BJ\nCN-0002,B,CN-TJ\n").unwrap();

        import_csv(&mut state, csv.clone()).unwrap();
        crate::commands::activation::activate_park(&mut state, "CN-0002".into(), Some("2024-05-01".into())).unwrap();
        let result = import_csv(&mut state, csv).unwrap();

        assert_eq!(result.activations_kept, 1);
        assert_eq!(state.parks[1].activation_time.as_deref(), Some("2024-05-01"));
    }
}
