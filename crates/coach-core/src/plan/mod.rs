//! The plan manager: an ordered working set of goals over the catalog.
//!
//! A [`PlanManager`] owns two pieces of state, both created empty at
//! construction and living exactly as long as the manager:
//!
//! - the **plan**, an ordered, duplicate-free sequence of goal ids
//!   (insertion order unless explicitly reordered);
//! - the **cache**, a map from goal id to the last snapshot fetched from the
//!   catalog.
//!
//! ```text
//! ┌──────────────┐  validate   ┌──────────────┐  miss   ┌──────────────┐
//! │    Caller    │────────────▶│ PlanManager  │────────▶│ GoalCatalog  │
//! │ (CLI, tests) │◀────────────│ plan + cache │◀────────│  (SQLite)    │
//! └──────────────┘   Goal(s)   └──────────────┘  Goal   └──────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`cache`]: read-through goal cache and its statistics
//! - [`validation`]: identifier coercion and membership checks
//! - [`membership`]: adding, removing, clearing and reordering
//! - [`views`]: listing, lookup, length and progress
//!
//! ## Staleness
//!
//! Cached snapshots never expire. A goal edited or deleted in the catalog
//! after it was cached keeps being served from the cache until
//! [`PlanManager::invalidate`] or [`PlanManager::clear_cache`] drops it.
//! [`PlanManager::get_plan_progress`] is the one read that always goes to
//! the catalog.
//!
//! ## Concurrency
//!
//! Membership checks and cache fills are check-then-act sequences. Every
//! operation that can touch either takes `&mut self`, so sharing one manager
//! across threads needs an explicit lock such as `Mutex<PlanManager<_>>`.
//!
//! # Example
//!
//! ```rust
//! use coach_core::{CoachError, Database, PlanManager, params::CreateGoal};
//!
//! # fn main() -> coach_core::Result<()> {
//! let mut db = Database::in_memory()?;
//! let squats = db.create_goal(&CreateGoal::new("quads", 100.0))?;
//!
//! let mut plan = PlanManager::new(&db);
//! plan.add_goal(squats.id)?;
//! assert_eq!(plan.get_plan_length(), 1);
//! assert!(matches!(plan.add_goal(squats.id), Err(CoachError::DuplicateEntry { .. })));
//! assert_eq!(plan.get_plan_progress()?, 0.0);
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod membership;
pub mod validation;
pub mod views;


pub use cache::CacheStats;

use cache::GoalCache;

use crate::catalog::GoalCatalog;

/// Ordered working set of goal ids with a read-through cache over a catalog.
pub struct PlanManager<C> {
    catalog: C,
    plan: Vec<u64>,
    cache: GoalCache,
}

impl<C: GoalCatalog> PlanManager<C> {
    /// Creates a manager with an empty plan and an empty cache.
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            plan: Vec::new(),
            cache: GoalCache::default(),
        }
    }

    /// The goal ids in plan order.
    pub fn goal_ids(&self) -> &[u64] {
        &self.plan
    }

    /// The backing catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Mutable access to the backing catalog.
    ///
    /// Edits made through it are not reflected in cached snapshots until the
    /// affected goals are invalidated.
    pub fn catalog_mut(&mut self) -> &mut C {
        &mut self.catalog
    }
}
