//! Request types for updating models.

/// Partial update of a goal's fields. `None` keeps the stored value.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UpdateGoalRequest {
    pub target: Option<String>,
    pub goal_value: Option<f64>,
    pub goal_progress: Option<f64>,
    pub completed: Option<bool>,
}

impl UpdateGoalRequest {
    /// True when the request would not change anything.
    pub fn is_empty(&self) -> bool {
        self.target.is_none()
            && self.goal_value.is_none()
            && self.goal_progress.is_none()
            && self.completed.is_none()
    }

    /// Human-readable list of the fields this request touches, used for
    /// update confirmations.
    pub fn describe_changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(target) = &self.target {
            changes.push(format!("Set target to '{}'", target.trim()));
        }
        if let Some(value) = self.goal_value {
            changes.push(format!("Set goal value to {value}"));
        }
        if let Some(progress) = self.goal_progress {
            changes.push(format!("Set progress to {progress}"));
        }
        if let Some(completed) = self.completed {
            changes.push(if completed {
                "Marked as completed".to_string()
            } else {
                "Marked as not completed".to_string()
            });
        }
        changes
    }
}
