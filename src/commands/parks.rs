//! Park table commands
//!
//! This module handles:
//! - get_provinces: Entries of the province selector
//! - list_parks: Filtered/sorted park table; a filter change is remembered

use serde::Serialize;

use super::settings::{get_last_province, set_last_province};
use super::state::AppState;
use crate::reference;
use crate::view::{build_rows, ParkRow, SortOrder, ViewConfig};

pub const ALL_PROVINCES_LABEL: &str = "全部省份";

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvinceOption {
    /// None for the "all provinces" entry
    pub code: Option<String>,
    pub label: String,
}

/// Which province the table should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvinceSelection {
    /// Whatever was selected in the previous session
    Restore,
    All,
    Province(String),
}

#[derive(Debug, Serialize)]
pub struct ParkTable {
    pub province: Option<String>,
    pub sort: SortOrder,
    pub total: usize,
    pub rows: Vec<ParkRow>,
}

// ============================================================================
// Commands
// ============================================================================

/// "All provinces" first, then every province sorted by name
pub fn get_provinces() -> Vec<ProvinceOption> {
    let mut options = vec![ProvinceOption {
        code: None,
        label: ALL_PROVINCES_LABEL.to_string(),
    }];
    options.extend(reference::provinces_by_name().into_iter().map(|p| ProvinceOption {
        code: Some(p.code.to_string()),
        label: format!("{} ({})", p.name, p.code),
    }));
    options
}

pub fn list_parks(
    state: &mut AppState,
    selection: ProvinceSelection,
    sort: SortOrder,
) -> Result<ParkTable, String> {
    let province = match selection {
        ProvinceSelection::Restore => {
            let province = get_last_province(state);
            if province.is_none() && state.config.last_province_code.is_some() {
                // Remember the selection actually shown
                set_last_province(state, None)?;
            }
            province
        }
        ProvinceSelection::All => {
            set_last_province(state, None)?;
            None
        }
        ProvinceSelection::Province(code) => {
            if !reference::is_province_code(&code) {
                return Err(format!("Unknown province code: {}", code));
            }
            set_last_province(state, Some(code.clone()))?;
            Some(code)
        }
    };

    let config = ViewConfig { province, sort };
    let rows = build_rows(&state.parks, &config);
    log::debug!(
        "Showing {} of {} parks for {}",
        rows.len(),
        state.parks.len(),
        config.province.as_deref().unwrap_or("all provinces")
    );

    Ok(ParkTable {
        province: config.province,
        sort: config.sort,
        total: state.parks.len(),
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::state::test_support::state_with;
    use crate::store::{ConfigStore, Park};

    fn parks() -> Vec<Park> {
        vec![
            Park::new("CN-0020", "West Lake", vec!["CN-ZJ".into()]),
            Park::new("CN-0003", "黄山", vec!["CN-AH".into()]),
            Park::new("CN-0011", "Tai Lake", vec!["CN-JS".into(), "CN-ZJ".into()]),
        ]
    }

    #[test]
    fn test_provinces_start_with_all() {
        let options = get_provinces();
        assert_eq!(options.len(), 35);
        assert_eq!(options[0].code, None);
        assert!(options
            .iter()
            .any(|o| o.code.as_deref() == Some("CN-AH") && o.label == "安徽 (CN-AH)"));
    }

    #[test]
    fn test_selecting_province_filters_and_remembers() {
        let (_dir, mut state) = state_with(parks());
        let table = list_parks(&mut state, ProvinceSelection::Province("CN-ZJ".into()), SortOrder::Catalog).unwrap();

        let refs: Vec<_> = table.rows.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, vec!["CN-0020", "CN-0011"]);
        assert_eq!(table.total, 3);

        let saved = ConfigStore::new(state.paths.config_file()).load();
        assert_eq!(saved.last_province_code.as_deref(), Some("CN-ZJ"));

        // Next session restores the filter
        let table = list_parks(&mut state, ProvinceSelection::Restore, SortOrder::ParkNumberAsc).unwrap();
        assert_eq!(table.province.as_deref(), Some("CN-ZJ"));
        let refs: Vec<_> = table.rows.iter().map(|r| r.reference.as_str()).collect();
        assert_eq!(refs, vec!["CN-0011", "CN-0020"]);
    }

    #[test]
    fn test_selecting_all_clears_memory() {
        let (_dir, mut state) = state_with(parks());
        list_parks(&mut state, ProvinceSelection::Province("CN-AH".into()), SortOrder::Catalog).unwrap();
        let table = list_parks(&mut state, ProvinceSelection::All, SortOrder::Catalog).unwrap();

        assert_eq!(table.rows.len(), 3);
        let saved = ConfigStore::new(state.paths.config_file()).load();
        assert_eq!(saved.last_province_code, None);
    }

    #[test]
    fn test_restoring_unknown_province_resets_memory() {
        let (_dir, mut state) = state_with(parks());
        state.config.last_province_code = Some("CN-ZZ".into());
        state.save_config().unwrap();

        let table = list_parks(&mut state, ProvinceSelection::Restore, SortOrder::Catalog).unwrap();
        assert_eq!(table.province, None);
        assert_eq!(table.rows.len(), 3);

        let saved = ConfigStore::new(state.paths.config_file()).load();
        assert_eq!(saved.last_province_code, None);
    }

    #[test]
    fn test_unknown_province_rejected() {
        let (_dir, mut state) = state_with(parks());
        let err = list_parks(&mut state, ProvinceSelection::Province("CN-ZZ".into()), SortOrder::Catalog).unwrap_err();
        assert!(err.contains("CN-ZZ"));
        assert!(!state.paths.config_file().exists());
    }
}
