//! Cleaning areas and their required headcounts.
//!
//! The list order is significant: shortfall fills areas front to back,
//! and overflow members rotate over the list in order. The list is
//! never re-sorted.

use serde::{Deserialize, Serialize};

use crate::error::AreaError;
use crate::names::AreaName;

/// A cleaning area with a required headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    pub name: AreaName,
    pub headcount: u32,
}

impl Area {
    /// Creates an area, rejecting a zero headcount.
    pub fn new(name: AreaName, headcount: u32) -> Result<Self, AreaError> {
        if headcount == 0 {
            return Err(AreaError::ZeroHeadcount(name));
        }
        Ok(Self { name, headcount })
    }
}

/// An ordered collection of areas with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaList {
    areas: Vec<Area>,
}

impl AreaList {
    /// Creates an empty area list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an area list, rejecting duplicate names and zero
    /// headcounts. Input order is preserved exactly.
    pub fn from_areas(areas: Vec<Area>) -> Result<Self, AreaError> {
        let mut list = Self::new();
        for area in areas {
            if area.headcount == 0 {
                return Err(AreaError::ZeroHeadcount(area.name));
            }
            if list.contains(&area.name) {
                return Err(AreaError::Duplicate(area.name));
            }
            list.areas.push(area);
        }
        Ok(list)
    }

    /// Appends a new area at the end of the list.
    pub fn add(&mut self, name: AreaName, headcount: u32) -> Result<(), AreaError> {
        if self.contains(&name) {
            return Err(AreaError::Duplicate(name));
        }
        self.areas.push(Area::new(name, headcount)?);
        Ok(())
    }

    /// Removes an area, returning the removed entry.
    pub fn remove(&mut self, name: &AreaName) -> Result<Area, AreaError> {
        let idx = self
            .areas
            .iter()
            .position(|a| &a.name == name)
            .ok_or_else(|| AreaError::NotFound(name.clone()))?;
        Ok(self.areas.remove(idx))
    }

    /// Changes an area's required headcount.
    pub fn set_headcount(&mut self, name: &AreaName, headcount: u32) -> Result<(), AreaError> {
        if headcount == 0 {
            return Err(AreaError::ZeroHeadcount(name.clone()));
        }
        let area = self
            .areas
            .iter_mut()
            .find(|a| &a.name == name)
            .ok_or_else(|| AreaError::NotFound(name.clone()))?;
        area.headcount = headcount;
        Ok(())
    }

    /// Returns true if an area with this name exists.
    #[must_use]
    pub fn contains(&self, name: &AreaName) -> bool {
        self.areas.iter().any(|a| &a.name == name)
    }

    /// All areas, in list order.
    #[must_use]
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Sum of required headcounts across all areas.
    #[must_use]
    pub fn total_headcount(&self) -> usize {
        self.areas.iter().map(|a| a.headcount as usize).sum()
    }

    /// Number of areas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Returns true if the list has no areas.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
