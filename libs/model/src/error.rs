//! Error types for domain validation.

use thiserror::Error;

use crate::names::{AreaName, MemberName};

/// Errors from parsing a member or area name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// The input was empty or whitespace-only.
    #[error("name is empty")]
    Empty,

    /// The input exceeds the maximum length.
    #[error("name is {actual} bytes, maximum is {max}")]
    TooLong { max: usize, actual: usize },

    /// The input contains control characters.
    #[error("name contains control characters")]
    ControlCharacter,
}

/// Errors from roster operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A member with this name already exists.
    #[error("member already exists: {0}")]
    Duplicate(MemberName),

    /// No member with this name exists.
    #[error("member not found: {0}")]
    NotFound(MemberName),
}

/// Errors from area list operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AreaError {
    /// An area with this name already exists.
    #[error("area already exists: {0}")]
    Duplicate(AreaName),

    /// No area with this name exists.
    #[error("area not found: {0}")]
    NotFound(AreaName),

    /// Headcount must be at least one.
    #[error("area {0} has zero headcount")]
    ZeroHeadcount(AreaName),
}
