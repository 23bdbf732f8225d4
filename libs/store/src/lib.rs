//! # rota-store
//!
//! File-backed stores for the dutyrota system:
//!
//! - [`RosterStore`]: members and their active flags
//! - [`AreaStore`]: areas and headcounts, order-preserving
//! - [`HistoryStore`]: the append-only assignment history
//!
//! Each store owns one versioned JSON file under the data directory.
//! Saves are atomic (write to a temp file, then rename). A missing file
//! is a cold start and loads as empty; a present but invalid file is a
//! typed error, never silently tolerated.

mod areas;
mod error;
mod fsio;
mod history;
mod paths;
mod roster;

pub use areas::AreaStore;
pub use error::StoreError;
pub use history::HistoryStore;
pub use paths::DataDir;
pub use roster::RosterStore;
