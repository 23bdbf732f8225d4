//! # rota-model
//!
//! Domain types and validation for the dutyrota roster system.
//!
//! ## Design Principles
//!
//! - Member and area names are the identity; there are no synthetic IDs
//! - Names are validated at the boundary and canonical once constructed
//! - Collections enforce their invariants (unique names, headcount >= 1)
//!   at construction, so downstream code never re-checks them
//! - The area list is ordered, and that order is meaningful: it is the
//!   shortfall priority and the overflow rotation order

mod areas;
mod error;
mod history;
mod macros;
mod names;
mod roster;

pub use areas::{Area, AreaList};
pub use error::{AreaError, NameError, RosterError};
pub use history::{rounds, Assignment, AssignmentRecord, Round, RoundMapping};
pub use names::{AreaName, MemberName};
pub use roster::{Member, Roster};
