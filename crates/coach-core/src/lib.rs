//! Core library for the Coach fitness goal tracker.
//!
//! This crate provides the goal catalog (SQLite storage for goal records),
//! the plan manager (an ordered working set of goals with a read-through
//! cache over the catalog), and markdown display wrappers for both.
//!
//! # Quick Start
//!
//! ```rust
//! use coach_core::{CatalogBuilder, PlanManager, params::CreateGoal};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let temp_dir = tempfile::tempdir()?;
//! let mut catalog = CatalogBuilder::new()
//!     .with_database_path(Some(temp_dir.path().join("coach.db")))
//!     .build()?;
//!
//! let curls = catalog.create_goal(&CreateGoal::new("biceps", 40.0))?;
//! let presses = catalog.create_goal(&CreateGoal {
//!     completed: true,
//!     ..CreateGoal::new("pectorals", 200.0)
//! })?;
//!
//! let mut plan = PlanManager::new(&catalog);
//! plan.add_goal(curls.id)?;
//! plan.add_goal(presses.id)?;
//!
//! assert_eq!(plan.get_plan_length(), 2);
//! assert_eq!(plan.get_plan_progress()?, 0.5);
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod plan;

// Re-export commonly used types
pub use catalog::{CatalogBuilder, GoalCatalog, MemoryCatalog};
pub use db::Database;
pub use display::{CreateResult, DeleteResult, Goals, OperationStatus, PlanProgress, UpdateResult};
pub use error::{CoachError, Result};
pub use models::{CompletionFilter, Goal, GoalFilter, GoalRef, UpdateGoalRequest};
pub use params::{AddProgressNote, CreateGoal, Id, ListGoals, UpdateGoal};
pub use plan::{CacheStats, PlanManager};
