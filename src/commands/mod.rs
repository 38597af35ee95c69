//! Command Handlers
//!
//! Every user action of the logbook maps onto one handler here. Handlers take
//! the explicit [`AppState`], mutate it, persist what changed, and return a
//! serializable result (or a message for the user).
//!
//! ## Module Organization
//! - `state` - Application state (catalog, config, stores)
//! - `date_utils` - Activation date validation and defaults
//! - `parks` - Province selector and park table
//! - `import` - CSV catalog import
//! - `activation` - Recording park activations
//! - `settings` - Remembered province filter
//! - `awards` - Activation progress

mod state;
pub mod date_utils;
pub mod parks;
pub mod import;
pub mod activation;
pub mod settings;
pub mod awards;

pub use state::AppState;
