//! Data models for goals.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.

pub mod filters;
pub mod goal;
pub mod goal_ref;
pub mod requests;


pub use filters::{CompletionFilter, GoalFilter};
pub use goal::Goal;
pub use goal_ref::GoalRef;
pub use requests::UpdateGoalRequest;
