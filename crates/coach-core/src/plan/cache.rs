//! Read-through goal cache.

use std::collections::HashMap;

use super::PlanManager;
use crate::{
    catalog::GoalCatalog,
    error::{CoachError, Result},
    models::Goal,
};

/// Snapshot of cache occupancy and effectiveness.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cached goal snapshots
    pub entries: usize,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that had to go to the catalog
    pub misses: u64,
}

/// Never-expiring map from goal id to the last fetched snapshot.
#[derive(Debug, Default)]
pub(crate) struct GoalCache {
    entries: HashMap<u64, Goal>,
    hits: u64,
    misses: u64,
}

impl GoalCache {
    fn lookup(&mut self, id: u64) -> Option<&Goal> {
        let entry = self.entries.get(&id);
        if entry.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        entry
    }

    pub(crate) fn store(&mut self, goal: Goal) {
        self.entries.insert(goal.id, goal);
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}

impl<C: GoalCatalog> PlanManager<C> {
    /// Resolves an id to a goal, from the cache when possible.
    ///
    /// A miss queries the catalog and caches the result before returning it.
    /// A catalog miss is [`CoachError::NotFound`] and caches nothing; catalog
    /// failures propagate unchanged.
    pub(crate) fn resolve_goal(&mut self, id: u64) -> Result<Goal> {
        if let Some(goal) = self.cache.lookup(id) {
            log::debug!("Goal {id} retrieved from cache");
            return Ok(goal.clone());
        }

        let goal = match self.catalog.get_by_id(id)? {
            Some(goal) => goal,
            None => {
                log::error!("Goal {id} not found in catalog");
                return Err(CoachError::NotFound { id });
            }
        };

        log::info!("Goal {id} loaded from catalog");
        self.cache.store(goal.clone());
        Ok(goal)
    }

    /// Drops the cached snapshot for one goal so the next read goes to the
    /// catalog. Returns whether a snapshot was cached.
    pub fn invalidate(&mut self, id: u64) -> bool {
        let removed = self.cache.entries.remove(&id).is_some();
        if removed {
            log::info!("Invalidated cached goal {id}");
        }
        removed
    }

    /// Drops every cached snapshot. Hit and miss counters are kept.
    pub fn clear_cache(&mut self) {
        log::info!("Clearing {} cached goals", self.cache.entries.len());
        self.cache.entries.clear();
    }

    /// Current cache occupancy and hit/miss counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
