//! Parameter structures for coach operations
//!
//! Shared parameter structures used by every interface without
//! framework-specific derives. The CLI wraps these in clap argument structs
//! and converts with `From`, so the core stays free of clap:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Catalog / Plan Manager
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{CompletionFilter, GoalFilter, UpdateGoalRequest};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the goal to operate on
    pub id: u64,
}

/// Parameters for creating a goal in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGoal {
    /// Muscle group or category, must not be blank
    pub target: String,
    /// Target magnitude
    pub goal_value: f64,
    /// Starting progress
    #[serde(default)]
    pub goal_progress: f64,
    /// Whether the goal starts out complete
    #[serde(default)]
    pub completed: bool,
}

impl CreateGoal {
    /// A fresh, not yet started goal.
    pub fn new(target: impl Into<String>, goal_value: f64) -> Self {
        Self {
            target: target.into(),
            goal_value,
            goal_progress: 0.0,
            completed: false,
        }
    }
}

/// Parameters for a partial goal update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateGoal {
    /// The ID of the goal to update
    pub id: u64,
    pub target: Option<String>,
    pub goal_value: Option<f64>,
    pub goal_progress: Option<f64>,
    pub completed: Option<bool>,
}

impl UpdateGoal {
    /// Splits the parameters into the target id and the update request.
    pub fn into_request(self) -> (u64, UpdateGoalRequest) {
        (
            self.id,
            UpdateGoalRequest {
                target: self.target,
                goal_value: self.goal_value,
                goal_progress: self.goal_progress,
                completed: self.completed,
            },
        )
    }
}

/// Parameters for listing goals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListGoals {
    /// Only goals on this target
    pub target: Option<String>,
    /// `Some(true)` for completed goals, `Some(false)` for pending ones
    pub completed: Option<bool>,
    /// Order by target instead of by id
    #[serde(default)]
    pub sort_by_target: bool,
}

impl From<&ListGoals> for GoalFilter {
    fn from(params: &ListGoals) -> Self {
        GoalFilter {
            target: params.target.clone(),
            completion: params.completed.map(|done| {
                if done {
                    CompletionFilter::Completed
                } else {
                    CompletionFilter::Pending
                }
            }),
            sort_by_target: params.sort_by_target,
        }
    }
}

/// Parameters for appending a progress note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddProgressNote {
    /// The ID of the goal to annotate
    pub id: u64,
    /// Note text, must not be blank
    pub note: String,
}
