//! Display formatting wrappers for goals, plans and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add collection and operation context. Everything renders
//! as markdown so the CLI can pass it through its terminal renderer.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │  (Goal)         │───▶│ (Goals, Create  │───▶│    Output       │
//! │                 │    │  Result, ...)   │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Goals)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Status messages and plan progress (OperationStatus, PlanProgress)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! # Examples
//!
//! ```rust
//! use coach_core::display::{OperationStatus, PlanProgress};
//!
//! let status = OperationStatus::success("Added goal 3 to the plan".to_string());
//! assert!(format!("{status}").contains("Success:"));
//!
//! let progress = PlanProgress::new(0.5, 2);
//! assert!(format!("{progress}").contains("50.0%"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

// Re-export commonly used types for convenience
pub use collections::Goals;
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::{OperationStatus, PlanProgress};
