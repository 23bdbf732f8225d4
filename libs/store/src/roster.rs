//! Roster persistence.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use rota_model::{Member, Roster};

use crate::error::StoreError;
use crate::fsio::{check_version, load_json, save_json};

/// Roster state file format version.
const ROSTER_VERSION: u32 = 1;

/// On-disk roster document.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedRoster {
    version: u32,
    members: Vec<Member>,
}

/// File-backed roster store.
pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    /// Creates a store over the given state file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the roster, validating uniqueness.
    ///
    /// A missing file loads as an empty roster.
    pub fn load(&self) -> Result<Roster, StoreError> {
        let Some(persisted) = load_json::<PersistedRoster>(&self.path)? else {
            return Ok(Roster::new());
        };

        check_version(&self.path, persisted.version, ROSTER_VERSION)?;
        let roster = Roster::from_members(persisted.members)?;

        info!(
            path = %self.path.display(),
            member_count = roster.len(),
            "loaded roster"
        );
        Ok(roster)
    }

    /// Saves the roster atomically.
    pub fn save(&self, roster: &Roster) -> Result<(), StoreError> {
        let persisted = PersistedRoster {
            version: ROSTER_VERSION,
            members: roster.members().to_vec(),
        };
        save_json(&self.path, &persisted)
    }
}
