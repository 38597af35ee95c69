// POTA Logbook Library
// Re-export modules for use in main.rs

pub mod commands;
pub mod import;
pub mod reference;
pub mod store;
pub mod view;
