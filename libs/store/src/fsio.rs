//! Versioned JSON file I/O shared by the stores.
//!
//! Saves use the write-to-temp-then-rename pattern so a crash mid-write
//! never leaves a truncated state file behind.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StoreError;

/// Reads and parses a JSON document, or `None` when the file is absent.
pub(crate) fn load_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    if !path.exists() {
        debug!(path = %path.display(), "no state file, starting fresh");
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })?;

    let value = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(value))
}

/// Serializes a JSON document and writes it atomically.
pub(crate) fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| StoreError::Io {
            action: "create directory for",
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let content = serde_json::to_string_pretty(value).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, &content).map_err(|source| StoreError::Io {
        action: "write",
        path: tmp_path.clone(),
        source,
    })?;

    fs::rename(&tmp_path, path).map_err(|source| StoreError::Io {
        action: "rename temp file onto",
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "saved state to disk");
    Ok(())
}

/// Rejects a file written with an unexpected schema version.
pub(crate) fn check_version(path: &Path, found: u32, expected: u32) -> Result<(), StoreError> {
    if found != expected {
        return Err(StoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            found,
            expected,
        });
    }
    Ok(())
}
