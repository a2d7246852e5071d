//! The goal catalog as seen by the plan manager.
//!
//! The plan manager consumes exactly one operation from its backing store:
//! look a goal up by id. [`GoalCatalog`] captures that seam so the SQLite
//! [`Database`] and the in-memory [`MemoryCatalog`] are interchangeable.

pub mod builder;
pub mod memory;

pub use builder::CatalogBuilder;
pub use memory::MemoryCatalog;

use crate::{db::Database, error::Result, models::Goal};

/// Read access to goal records by id.
pub trait GoalCatalog {
    /// Looks a goal up by id.
    ///
    /// `Ok(None)` is the "not found" condition. `Err` is reserved for
    /// failures of the store itself.
    fn get_by_id(&self, id: u64) -> Result<Option<Goal>>;
}

impl GoalCatalog for Database {
    fn get_by_id(&self, id: u64) -> Result<Option<Goal>> {
        self.get_goal(id)
    }
}

impl<C: GoalCatalog + ?Sized> GoalCatalog for &C {
    fn get_by_id(&self, id: u64) -> Result<Option<Goal>> {
        (**self).get_by_id(id)
    }
}
