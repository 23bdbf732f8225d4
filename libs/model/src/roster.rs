//! Roster of members and their participation state.

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::names::MemberName;

/// A roster member.
///
/// Inactive members stay on the roster (their history remains
/// meaningful) but are excluded from new allocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub name: MemberName,
    pub active: bool,
}

impl Member {
    /// Creates an active member.
    #[must_use]
    pub fn new(name: MemberName) -> Self {
        Self { name, active: true }
    }
}

/// An ordered collection of members with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: Vec<Member>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from a member list, rejecting duplicate names.
    pub fn from_members(members: Vec<Member>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for member in members {
            if roster.contains(&member.name) {
                return Err(RosterError::Duplicate(member.name));
            }
            roster.members.push(member);
        }
        Ok(roster)
    }

    /// Adds a new active member.
    pub fn add(&mut self, name: MemberName) -> Result<(), RosterError> {
        if self.contains(&name) {
            return Err(RosterError::Duplicate(name));
        }
        self.members.push(Member::new(name));
        Ok(())
    }

    /// Removes a member, returning the removed entry.
    pub fn remove(&mut self, name: &MemberName) -> Result<Member, RosterError> {
        let idx = self
            .members
            .iter()
            .position(|m| &m.name == name)
            .ok_or_else(|| RosterError::NotFound(name.clone()))?;
        Ok(self.members.remove(idx))
    }

    /// Sets a member's active flag.
    pub fn set_active(&mut self, name: &MemberName, active: bool) -> Result<(), RosterError> {
        let member = self
            .members
            .iter_mut()
            .find(|m| &m.name == name)
            .ok_or_else(|| RosterError::NotFound(name.clone()))?;
        member.active = active;
        Ok(())
    }

    /// Returns true if a member with this name exists.
    #[must_use]
    pub fn contains(&self, name: &MemberName) -> bool {
        self.members.iter().any(|m| &m.name == name)
    }

    /// All members in roster order.
    #[must_use]
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Names of active members, in roster order.
    #[must_use]
    pub fn active_names(&self) -> Vec<MemberName> {
        self.members
            .iter()
            .filter(|m| m.active)
            .map(|m| m.name.clone())
            .collect()
    }

    /// Number of members, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> MemberName {
        MemberName::parse(s).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let mut roster = Roster::new();
        roster.add(name("Alice")).unwrap();
        roster.add(name("Bob")).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.members()[0].name, name("Alice"));
        assert!(roster.members()[0].active);
    }

    #[test]
    fn test_duplicate_add_rejected() {
        let mut roster = Roster::new();
        roster.add(name("Alice")).unwrap();

        let err = roster.add(name("Alice")).unwrap_err();
        assert_eq!(err, RosterError::Duplicate(name("Alice")));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_from_members_rejects_duplicates() {
        let members = vec![Member::new(name("Alice")), Member::new(name("Alice"))];
        assert!(matches!(
            Roster::from_members(members),
            Err(RosterError::Duplicate(_))
        ));
    }

    #[test]
    fn test_deactivate_excludes_from_active_names() {
        let mut roster = Roster::new();
        roster.add(name("Alice")).unwrap();
        roster.add(name("Bob")).unwrap();
        roster.set_active(&name("Alice"), false).unwrap();

        assert_eq!(roster.active_names(), vec![name("Bob")]);
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove_missing_member() {
        let mut roster = Roster::new();
        let err = roster.remove(&name("Ghost")).unwrap_err();
        assert_eq!(err, RosterError::NotFound(name("Ghost")));
    }
}
