//! Park activation commands
//!
//! This module handles:
//! - activate: Mark a park in the catalog as activated on a date (pure)
//! - activate_park: Command wrapper that also persists the catalog
//!
//! Re-activating an activated park overwrites its date. There is no
//! reverse transition.

use serde::Serialize;
use thiserror::Error;

use super::date_utils::{is_valid_activation_date, today_local};
use super::state::AppState;
use crate::store::Park;

// ============================================================================
// Data Types
// ============================================================================

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ActivationError {
    #[error("park {0} not found")]
    NotFound(String),

    #[error("invalid activation date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

#[derive(Debug, Serialize)]
pub struct ActivationResult {
    pub reference: String,
    pub name: String,
    pub activation_time: String,
    /// Date this activation replaced, if the park was already activated
    pub previous_activation_time: Option<String>,
}

// ============================================================================
// Activation
// ============================================================================

/// Set `reference` activated on `date`. On error the catalog is untouched.
pub fn activate<'a>(
    parks: &'a mut [Park],
    reference: &str,
    date: &str,
) -> Result<&'a Park, ActivationError> {
    if !is_valid_activation_date(date) {
        return Err(ActivationError::InvalidDate(date.to_string()));
    }
    let park = parks
        .iter_mut()
        .find(|p| p.reference == reference)
        .ok_or_else(|| ActivationError::NotFound(reference.to_string()))?;

    park.activated = true;
    park.activation_time = Some(date.to_string());
    Ok(park)
}

/// Activate a park and persist the catalog. `date` defaults to today.
pub fn activate_park(
    state: &mut AppState,
    reference: String,
    date: Option<String>,
) -> Result<ActivationResult, String> {
    let date = date.unwrap_or_else(today_local);
    log::info!("Activating {} on {}", reference, date);

    let snapshot = state
        .parks
        .iter()
        .position(|p| p.reference == reference)
        .map(|i| (i, state.parks[i].clone()));
    let previous = snapshot.as_ref().and_then(|(_, p)| p.activation_time.clone());

    let park = match activate(&mut state.parks, &reference, &date) {
        Ok(park) => park,
        Err(e) => {
            log::warn!("Activation rejected: {}", e);
            return Err(e.to_string());
        }
    };
    let result = ActivationResult {
        reference: park.reference.clone(),
        name: park.name.clone(),
        activation_time: date,
        previous_activation_time: previous,
    };

    // Memory must not run ahead of disk
    if let Err(e) = state.save_parks() {
        if let Some((i, park)) = snapshot {
            state.parks[i] = park;
        }
        return Err(e);
    }
    Ok(result)
}
