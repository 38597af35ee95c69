//! Settings commands
//!
//! This module handles:
//! - get_last_province: Province filter remembered from the previous session
//! - set_last_province: Remember the current province filter

use super::state::AppState;
use crate::reference;

/// Remembered province filter. A stored code that is no longer in the
/// province table is ignored, falling back to all provinces.
pub fn get_last_province(state: &AppState) -> Option<String> {
    let code = state.config.last_province_code.as_deref()?;
    if reference::is_province_code(code) {
        Some(code.to_string())
    } else {
        log::warn!("Ignoring unknown remembered province {}", code);
        None
    }
}

pub fn set_last_province(state: &mut AppState, code: Option<String>) -> Result<(), String> {
    log::info!(
        "Setting last_province_code = {}",
        code.as_deref().unwrap_or("<all>")
    );
    state.config.last_province_code = code;
    state.save_config()
}
