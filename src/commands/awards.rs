//! Activation progress commands
//!
//! This module handles:
//! - get_activation_progress: Activated/total parks overall and per province

use serde::Serialize;

use super::state::AppState;
use crate::reference;
use crate::store::Park;

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ProvinceProgress {
    pub code: String,
    pub name: String,
    pub activated: usize,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct ActivationProgress {
    pub activated: usize,
    pub total: usize,
    /// Provinces with at least one park, in selector order
    pub provinces: Vec<ProvinceProgress>,
}

// ============================================================================
// Progress
// ============================================================================

pub fn calculate_progress(parks: &[Park]) -> ActivationProgress {
    let provinces = reference::provinces_by_name()
        .into_iter()
        .filter_map(|p| {
            let in_province = parks.iter().filter(|park| park.in_province(p.code));
            let (total, activated) = in_province.fold((0, 0), |(t, a), park| {
                (t + 1, a + usize::from(park.activated))
            });
            (total > 0).then(|| ProvinceProgress {
                code: p.code.to_string(),
                name: p.name.to_string(),
                activated,
                total,
            })
        })
        .collect();

    ActivationProgress {
        activated: parks.iter().filter(|p| p.activated).count(),
        total: parks.len(),
        provinces,
    }
}

pub fn get_activation_progress(state: &AppState) -> ActivationProgress {
    calculate_progress(&state.parks)
}
