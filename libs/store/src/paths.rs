//! Data directory resolution.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::StoreError;

/// Roster state file name.
const MEMBERS_FILE: &str = "members.json";

/// Area state file name.
const AREAS_FILE: &str = "areas.json";

/// History state file name.
const HISTORY_FILE: &str = "history.json";

/// The directory holding all store files.
#[derive(Debug, Clone)]
pub struct DataDir(PathBuf);

impl DataDir {
    /// Resolves the data directory.
    ///
    /// An explicit override (from the `--data-dir` flag or the
    /// `ROTA_DATA_DIR` environment variable, both handled by the CLI)
    /// wins; otherwise the platform data directory is used.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self, StoreError> {
        if let Some(path) = explicit {
            return Ok(Self(path));
        }

        ProjectDirs::from("dev", "dutyrota", "rota")
            .map(|dirs| Self(dirs.data_dir().to_path_buf()))
            .ok_or(StoreError::NoDataDir)
    }

    /// The directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Path of the roster state file.
    #[must_use]
    pub fn members_file(&self) -> PathBuf {
        self.0.join(MEMBERS_FILE)
    }

    /// Path of the area state file.
    #[must_use]
    pub fn areas_file(&self) -> PathBuf {
        self.0.join(AREAS_FILE)
    }

    /// Path of the history state file.
    #[must_use]
    pub fn history_file(&self) -> PathBuf {
        self.0.join(HISTORY_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = DataDir::resolve(Some(PathBuf::from("/tmp/rota-test"))).unwrap();
        assert_eq!(dir.path(), Path::new("/tmp/rota-test"));
        assert_eq!(
            dir.members_file(),
            Path::new("/tmp/rota-test/members.json")
        );
    }
}
