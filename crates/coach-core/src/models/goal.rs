//! Goal model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A fitness goal as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Unique identifier, assigned by the catalog and never reused
    pub id: u64,

    /// Muscle group or category the goal targets
    pub target: String,

    /// Target magnitude
    pub goal_value: f64,

    /// Current progress toward `goal_value`
    pub goal_progress: f64,

    /// Whether the goal has been marked complete
    #[serde(default)]
    pub completed: bool,

    /// Free-text progress history, oldest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub progress_notes: Vec<String>,

    /// Timestamp when the goal was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the goal was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Goal {
    /// Fraction of `goal_value` reached so far, capped at 1.0.
    ///
    /// Returns `None` when the goal has a zero target, since no fraction is
    /// meaningful there.
    pub fn progress_fraction(&self) -> Option<f64> {
        if self.goal_value <= 0.0 {
            return None;
        }
        Some((self.goal_progress / self.goal_value).min(1.0))
    }
}
