//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem read or write failure.
    #[error("failed to {action} {path:?}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not valid JSON for its schema.
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file was written by an incompatible version of this tool.
    #[error("{path:?} has unsupported version {found} (expected {expected})")]
    UnsupportedVersion {
        path: PathBuf,
        found: u32,
        expected: u32,
    },

    /// Persisted roster data violates a roster invariant.
    #[error("invalid roster data: {0}")]
    InvalidRoster(#[from] rota_model::RosterError),

    /// Persisted area data violates an area invariant.
    #[error("invalid area data: {0}")]
    InvalidAreas(#[from] rota_model::AreaError),

    /// No data directory could be determined.
    #[error("could not determine a data directory; pass --data-dir or set ROTA_DATA_DIR")]
    NoDataDir,
}
