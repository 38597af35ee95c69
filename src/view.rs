//! Park table view model
//!
//! Pure functions deriving what the park table shows from the catalog plus a
//! [`ViewConfig`]. Nothing here is cached; callers recompute on every render.

use serde::Serialize;

use crate::store::Park;

/// Label shown in the activation column of a park that is not yet activated
pub const ACTIVATE_LABEL: &str = "激活";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog order (after filtering)
    #[default]
    Catalog,
    /// By park number, smallest first
    ParkNumberAsc,
    /// By park number, largest first
    ParkNumberDesc,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Selected province code; None shows every park
    pub province: Option<String>,
    pub sort: SortOrder,
}

/// One displayed row of the park table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParkRow {
    /// 1-based position among the displayed rows
    pub index: usize,
    pub reference: String,
    pub name: String,
    pub park_number: u64,
    /// Activation date, or the call to action
    pub activation_label: String,
    /// Activated rows are rendered distinctly
    pub highlighted: bool,
}

/// Parks in `catalog` belonging to `province` (all of them for None),
/// in catalog order
pub fn filter_parks<'a>(catalog: &'a [Park], province: Option<&str>) -> Vec<&'a Park> {
    match province {
        None => catalog.iter().collect(),
        Some(code) => catalog.iter().filter(|p| p.in_province(code)).collect(),
    }
}

/// Sort in place by park number; stable, so ties keep catalog order
pub fn sort_parks(parks: &mut [&Park], order: SortOrder) {
    match order {
        SortOrder::Catalog => {}
        SortOrder::ParkNumberAsc => parks.sort_by_key(|p| p.park_number()),
        SortOrder::ParkNumberDesc => parks.sort_by(|a, b| b.park_number().cmp(&a.park_number())),
    }
}

pub fn activation_label(park: &Park) -> String {
    match &park.activation_time {
        Some(date) if park.activated => date.clone(),
        _ => ACTIVATE_LABEL.to_string(),
    }
}

/// Build the displayed rows for `config`
pub fn build_rows(catalog: &[Park], config: &ViewConfig) -> Vec<ParkRow> {
    let mut parks = filter_parks(catalog, config.province.as_deref());
    sort_parks(&mut parks, config.sort);

    parks
        .into_iter()
        .enumerate()
        .map(|(i, park)| ParkRow {
            index: i + 1,
            reference: park.reference.clone(),
            name: park.name.clone(),
            park_number: park.park_number(),
            activation_label: activation_label(park),
            highlighted: park.activated,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Park> {
        let mut tai = Park::new("CN-0002", "泰山", vec!["CN-SD".into()]);
        tai.activated = true;
        tai.activation_time = Some("2024-05-01".into());
        vec![
            Park::new("CN-0010", "Lake", vec!["CN-ZJ".into(), "CN-JS".into()]),
            tai,
            Park::new("CN-0001", "黄山", vec!["CN-AH".into()]),
            Park::new("BADREF", "Odd", vec!["CN-ZJ".into()]),
        ]
    }

    fn refs(rows: &[ParkRow]) -> Vec<&str> {
        rows.iter().map(|r| r.reference.as_str()).collect()
    }

    #[test]
    fn test_filter_all_keeps_catalog_order() {
        let cat = catalog();
        let all = filter_parks(&cat, None);
        assert_eq!(all.len(), cat.len());
        assert!(all.iter().zip(&cat).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_by_province() {
        let cat = catalog();
        let zj: Vec<_> = filter_parks(&cat, Some("CN-ZJ")).iter().map(|p| p.reference.as_str()).collect();
        assert_eq!(zj, vec!["CN-0010", "BADREF"]);
        assert!(filter_parks(&cat, Some("CN-XZ")).is_empty());
    }

    #[test]
    fn test_default_rows_are_numbered_in_catalog_order() {
        let rows = build_rows(&catalog(), &ViewConfig::default());
        assert_eq!(refs(&rows), vec!["CN-0010", "CN-0002", "CN-0001", "BADREF"]);
        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sorted_rows_renumbered() {
        let config = ViewConfig {
            province: None,
            sort: SortOrder::ParkNumberAsc,
        };
        let rows = build_rows(&catalog(), &config);
        assert_eq!(refs(&rows), vec!["BADREF", "CN-0001", "CN-0002", "CN-0010"]);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].park_number, 0);

        let config = ViewConfig {
            province: Some("CN-ZJ".into()),
            sort: SortOrder::ParkNumberDesc,
        };
        let rows = build_rows(&catalog(), &config);
        assert_eq!(refs(&rows), vec!["CN-0010", "BADREF"]);
        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_activation_label_and_highlight() {
        let rows = build_rows(&catalog(), &ViewConfig::default());
        assert_eq!(rows[1].activation_label, "2024-05-01");
        assert!(rows[1].highlighted);
        assert_eq!(rows[0].activation_label, ACTIVATE_LABEL);
        assert!(!rows[0].highlighted);
    }
}
