//! Assignment allocation primitives.
//!
//! This library maps a roster of active members and a list of areas
//! (each requiring a fixed headcount) to a concrete person-to-area
//! assignment for one round. Key concepts:
//!
//! - **Preference**: a member who held an area last round is passed
//!   over for that area while any other candidate remains.
//! - **Overflow**: members beyond the total headcount are distributed
//!   round-robin over the area list.
//! - **Shortfall**: when members run out, later areas go short.
//!
//! # Invariants
//!
//! - Allocation is total: every input produces a result, never an error
//! - A member appears at most once per round
//! - Area list order is the shortfall priority and overflow rotation
//!   order; it is consumed as given, never re-sorted
//! - All randomness comes from the caller-supplied generator

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use rota_model::{Area, Assignment, AssignmentRecord, MemberName, Round, RoundMapping};

/// Allocates active members to areas for one round.
///
/// The pool is shuffled with `rng`, then each area takes up to its
/// headcount from the pool, preferring members who did not hold that
/// area in `previous`. If every remaining member held exactly this area
/// last round, the pool head is taken regardless. Leftover members are
/// distributed round-robin over the area list.
///
/// Repeats are discouraged, never forbidden: only the immediately
/// preceding round is consulted.
pub fn allocate<R: Rng + ?Sized>(
    active: &[MemberName],
    areas: &[Area],
    previous: &RoundMapping,
    rng: &mut R,
) -> Vec<Assignment> {
    let mut pool: Vec<MemberName> = active.to_vec();
    pool.shuffle(rng);

    let mut assignments = Vec::with_capacity(pool.len());

    for area in areas {
        for _ in 0..area.headcount {
            if pool.is_empty() {
                break;
            }

            // Prefer anyone who was not on this area last round; fall
            // back to the pool head when no such candidate remains.
            let idx = pool
                .iter()
                .position(|member| previous.get(member) != Some(&area.name))
                .unwrap_or(0);

            let member = pool.remove(idx);
            assignments.push(Assignment {
                area: area.name.clone(),
                member,
            });
        }
    }

    // Overflow: every remaining member still gets placed, cycling over
    // the area list in order.
    if !areas.is_empty() {
        for (offset, member) in pool.drain(..).enumerate() {
            let area = &areas[offset % areas.len()];
            assignments.push(Assignment {
                area: area.name.clone(),
                member,
            });
        }
    }

    assignments
}

/// Runs [`allocate`] and stamps the result as a [`Round`].
///
/// Every record in the round carries the single `stamped_at` timestamp
/// taken at invocation start.
pub fn generate_round<R: Rng + ?Sized>(
    stamped_at: DateTime<Utc>,
    active: &[MemberName],
    areas: &[Area],
    previous: &RoundMapping,
    rng: &mut R,
) -> Round {
    Round::new(stamped_at, allocate(active, areas, previous, rng))
}

/// Computes the most-recent-round mapping from append-only history.
///
/// Returns an empty mapping for empty history. When several rounds
/// share the maximum timestamp (clock collision), their records are
/// merged in input order, last write per member wins.
#[must_use]
pub fn latest_round_mapping(records: &[AssignmentRecord]) -> RoundMapping {
    let Some(latest) = records.iter().map(|r| r.stamped_at).max() else {
        return RoundMapping::new();
    };

    let mut mapping = RoundMapping::new();
    for record in records.iter().filter(|r| r.stamped_at == latest) {
        mapping.insert(record.member.clone(), record.area.clone());
    }
    mapping
}

/// Relation between active members and total required headcount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Balance {
    /// Active count equals the headcount sum.
    Balanced,

    /// More active members than required; the excess is distributed
    /// round-robin.
    Overflow(usize),

    /// Fewer active members than required; some quotas go unmet.
    Shortfall(usize),
}

/// Pre-check summary shown to callers before generating a round.
///
/// A mismatch is a warning, never an error; allocation proceeds
/// regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaffingSummary {
    /// Number of active members.
    pub active: usize,

    /// Sum of required headcounts.
    pub required: usize,
}

impl StaffingSummary {
    /// Computes the summary for an active count and area list.
    #[must_use]
    pub fn new(active: usize, areas: &[Area]) -> Self {
        Self {
            active,
            required: areas.iter().map(|a| a.headcount as usize).sum(),
        }
    }

    /// Classifies the mismatch, if any.
    #[must_use]
    pub fn balance(&self) -> Balance {
        match self.active.cmp(&self.required) {
            std::cmp::Ordering::Equal => Balance::Balanced,
            std::cmp::Ordering::Greater => Balance::Overflow(self.active - self.required),
            std::cmp::Ordering::Less => Balance::Shortfall(self.required - self.active),
        }
    }

    /// Returns true when active count matches the headcount sum.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        matches!(self.balance(), Balance::Balanced)
    }
}
