//! Append-only assignment history persistence.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use rota_allocate::latest_round_mapping;
use rota_model::{AssignmentRecord, Round, RoundMapping};

use crate::error::StoreError;
use crate::fsio::{check_version, load_json, save_json};

/// History state file format version.
const HISTORY_VERSION: u32 = 1;

/// On-disk history document.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedHistory {
    version: u32,
    records: Vec<AssignmentRecord>,
}

/// File-backed history store.
///
/// The file is rewritten whole on append, atomically. Serializing
/// concurrent appenders is the caller's transaction boundary; a
/// single-shot CLI process satisfies that trivially.
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    /// Creates a store over the given state file path.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads all history records in stored order.
    ///
    /// A missing file loads as empty history.
    pub fn load(&self) -> Result<Vec<AssignmentRecord>, StoreError> {
        let Some(persisted) = load_json::<PersistedHistory>(&self.path)? else {
            return Ok(Vec::new());
        };

        check_version(&self.path, persisted.version, HISTORY_VERSION)?;
        Ok(persisted.records)
    }

    /// Appends one round's records, returning the appended count.
    pub fn append_round(&self, round: &Round) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        let appended = round.len();
        records.extend(round.records());

        let persisted = PersistedHistory {
            version: HISTORY_VERSION,
            records,
        };
        save_json(&self.path, &persisted)?;

        info!(
            path = %self.path.display(),
            stamped_at = %round.stamped_at,
            appended,
            "appended round to history"
        );
        Ok(appended)
    }

    /// Computes the most-recent-round mapping for allocator input.
    pub fn latest_mapping(&self) -> Result<RoundMapping, StoreError> {
        Ok(latest_round_mapping(&self.load()?))
    }
}
