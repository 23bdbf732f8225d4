//! Area list persistence.
//!
//! The persisted array order is the area priority order and must
//! round-trip exactly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use rota_model::{Area, AreaList};

use crate::error::StoreError;
use crate::fsio::{check_version, load_json, save_json};

/// Area state file format version.
const AREAS_VERSION: u32 = 1;

/// On-disk area document.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedAreas {
    version: u32,
    areas: Vec<Area>,
}

/// File-backed area store.
pub struct AreaStore {
    path: PathBuf,
}

impl AreaStore {
    /// Creates a store over the given state file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the area list, validating names and headcounts.
    ///
    /// A missing file loads as an empty list.
    pub fn load(&self) -> Result<AreaList, StoreError> {
        let Some(persisted) = load_json::<PersistedAreas>(&self.path)? else {
            return Ok(AreaList::new());
        };

        check_version(&self.path, persisted.version, AREAS_VERSION)?;
        let areas = AreaList::from_areas(persisted.areas)?;

        info!(
            path = %self.path.display(),
            area_count = areas.len(),
            "loaded areas"
        );
        Ok(areas)
    }

    /// Saves the area list atomically, preserving order.
    pub fn save(&self, areas: &AreaList) -> Result<(), StoreError> {
        let persisted = PersistedAreas {
            version: AREAS_VERSION,
            areas: areas.areas().to_vec(),
        };
        save_json(&self.path, &persisted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rota_model::AreaName;
    use tempfile::tempdir;

    fn name(s: &str) -> AreaName {
        AreaName::parse(s).unwrap()
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = AreaStore::new(dir.path().join("areas.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_order_roundtrips_exactly() {
        let dir = tempdir().unwrap();
        let store = AreaStore::new(dir.path().join("areas.json"));

        let mut areas = AreaList::new();
        areas.add(name("Window"), 2).unwrap();
        areas.add(name("Floor"), 4).unwrap();
        areas.add(name("Trash"), 1).unwrap();
        store.save(&areas).unwrap();

        let loaded = store.load().unwrap();
        let names: Vec<_> = loaded.areas().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Window", "Floor", "Trash"]);
    }

    #[test]
    fn test_zero_headcount_rejected_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("areas.json");
        std::fs::write(
            &path,
            r#"{"version":1,"areas":[{"name":"Floor","headcount":0}]}"#,
        )
        .unwrap();

        let store = AreaStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::InvalidAreas(_))));
    }

    #[test]
    fn test_duplicate_area_rejected_at_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("areas.json");
        std::fs::write(
            &path,
            r#"{"version":1,"areas":[
                {"name":"Floor","headcount":1},
                {"name":"Floor","headcount":2}
            ]}"#,
        )
        .unwrap();

        let store = AreaStore::new(path);
        assert!(matches!(store.load(), Err(StoreError::InvalidAreas(_))));
    }
}
