//! Assignment records and rounds.
//!
//! History is an append-only sequence of records. All records produced
//! by one allocator invocation share a single timestamp; that shared
//! timestamp is what groups them into a round. Rounds are immutable
//! once created.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::names::{AreaName, MemberName};

/// One allocator output pair, before stamping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub area: AreaName,
    pub member: MemberName,
}

/// One persisted history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub stamped_at: DateTime<Utc>,
    pub area: AreaName,
    pub member: MemberName,
}

/// The most-recent-round view: member to the area they held last round.
pub type RoundMapping = BTreeMap<MemberName, AreaName>;

/// A batch of assignments sharing one timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub stamped_at: DateTime<Utc>,
    pub assignments: Vec<Assignment>,
}

impl Round {
    /// Creates a round from stamped-at time and assignment pairs.
    #[must_use]
    pub fn new(stamped_at: DateTime<Utc>, assignments: Vec<Assignment>) -> Self {
        Self {
            stamped_at,
            assignments,
        }
    }

    /// Produces the persisted records for this round.
    #[must_use]
    pub fn records(&self) -> Vec<AssignmentRecord> {
        self.assignments
            .iter()
            .map(|a| AssignmentRecord {
                stamped_at: self.stamped_at,
                area: a.area.clone(),
                member: a.member.clone(),
            })
            .collect()
    }

    /// Groups members per area, areas ordered by first appearance.
    ///
    /// Overflow assignments land in the same group as the area's quota
    /// assignments, so each area appears once.
    #[must_use]
    pub fn by_area(&self) -> Vec<(AreaName, Vec<MemberName>)> {
        let mut groups: Vec<(AreaName, Vec<MemberName>)> = Vec::new();
        for assignment in &self.assignments {
            match groups.iter_mut().find(|(area, _)| area == &assignment.area) {
                Some((_, members)) => members.push(assignment.member.clone()),
                None => groups.push((assignment.area.clone(), vec![assignment.member.clone()])),
            }
        }
        groups
    }

    /// Number of assignments in the round.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if the round placed nobody.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Groups history records into rounds by shared timestamp, ordered by
/// timestamp ascending. Record order within a round follows input order.
#[must_use]
pub fn rounds(records: &[AssignmentRecord]) -> Vec<Round> {
    let mut by_stamp: BTreeMap<DateTime<Utc>, Vec<Assignment>> = BTreeMap::new();
    for record in records {
        by_stamp
            .entry(record.stamped_at)
            .or_default()
            .push(Assignment {
                area: record.area.clone(),
                member: record.member.clone(),
            });
    }

    by_stamp
        .into_iter()
        .map(|(stamped_at, assignments)| Round::new(stamped_at, assignments))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn member(s: &str) -> MemberName {
        MemberName::parse(s).unwrap()
    }

    fn area(s: &str) -> AreaName {
        AreaName::parse(s).unwrap()
    }

    fn stamp(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_round_records_share_timestamp() {
        let round = Round::new(
            stamp(100),
            vec![
                Assignment {
                    area: area("Floor"),
                    member: member("Alice"),
                },
                Assignment {
                    area: area("Window"),
                    member: member("Bob"),
                },
            ],
        );

        let records = round.records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.stamped_at == stamp(100)));
    }

    #[test]
    fn test_by_area_groups_in_first_appearance_order() {
        let round = Round::new(
            stamp(100),
            vec![
                Assignment {
                    area: area("Floor"),
                    member: member("Alice"),
                },
                Assignment {
                    area: area("Window"),
                    member: member("Bob"),
                },
                Assignment {
                    area: area("Floor"),
                    member: member("Carol"),
                },
            ],
        );

        let grouped = round.by_area();
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0].0, area("Floor"));
        assert_eq!(grouped[0].1, vec![member("Alice"), member("Carol")]);
        assert_eq!(grouped[1].0, area("Window"));
    }

    #[test]
    fn test_rounds_groups_by_timestamp() {
        let records = vec![
            AssignmentRecord {
                stamped_at: stamp(200),
                area: area("Floor"),
                member: member("Bob"),
            },
            AssignmentRecord {
                stamped_at: stamp(100),
                area: area("Floor"),
                member: member("Alice"),
            },
            AssignmentRecord {
                stamped_at: stamp(200),
                area: area("Window"),
                member: member("Alice"),
            },
        ];

        let rounds = rounds(&records);
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].stamped_at, stamp(100));
        assert_eq!(rounds[1].stamped_at, stamp(200));
        assert_eq!(rounds[1].len(), 2);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = AssignmentRecord {
            stamped_at: stamp(100),
            area: area("Floor"),
            member: member("Alice"),
        };

        let json = serde_json::to_string(&record).unwrap();
        let parsed: AssignmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
