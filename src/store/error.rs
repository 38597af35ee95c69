use std::path::PathBuf;

use thiserror::Error;

/// Errors from the JSON-backed stores
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid park data: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} does not contain a list of park records", .path.display())]
    NotAnArray { path: PathBuf },

    #[error("{}: park {reference} has activated and activation_time out of step", .path.display())]
    InconsistentActivation { path: PathBuf, reference: String },

    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
