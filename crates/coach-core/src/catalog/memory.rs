//! In-memory goal catalog.

use std::{cell::Cell, collections::BTreeMap};

use super::GoalCatalog;
use crate::{error::Result, models::Goal};

/// A goal catalog held entirely in memory.
///
/// Every lookup is counted, which makes it a convenient stand-in for the
/// SQLite catalog when asserting how often the plan manager reaches past its
/// cache.
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    goals: BTreeMap<u64, Goal>,
    lookups: Cell<usize>,
}

impl MemoryCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a goal, replacing any goal with the same id.
    pub fn insert(&mut self, goal: Goal) -> Option<Goal> {
        self.goals.insert(goal.id, goal)
    }

    /// Removes a goal, returning it if present.
    pub fn remove(&mut self, id: u64) -> Option<Goal> {
        self.goals.remove(&id)
    }

    /// Mutable access to a stored goal, for simulating catalog-side edits.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Goal> {
        self.goals.get_mut(&id)
    }

    /// Number of `get_by_id` calls served so far.
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }

    /// Number of goals stored.
    pub fn len(&self) -> usize {
        self.goals.len()
    }

    /// True when no goals are stored.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }
}

impl FromIterator<Goal> for MemoryCatalog {
    fn from_iter<I: IntoIterator<Item = Goal>>(iter: I) -> Self {
        Self {
            goals: iter.into_iter().map(|goal| (goal.id, goal)).collect(),
            lookups: Cell::new(0),
        }
    }
}

impl GoalCatalog for MemoryCatalog {
    fn get_by_id(&self, id: u64) -> Result<Option<Goal>> {
        self.lookups.set(self.lookups.get() + 1);
        Ok(self.goals.get(&id).cloned())
    }
}
