//! Collection wrapper types for displaying groups of goals.

use std::{fmt, ops::Index};

use crate::models::Goal;

/// Newtype wrapper for displaying a list of goals, one compact line each.
///
/// Used for both catalog listings and the contents of a plan, where the
/// position in the list is the plan order.
///
/// # Examples
///
/// ```rust
/// use coach_core::{display::Goals, models::Goal};
/// use jiff::Timestamp;
///
/// let goal = Goal {
///     id: 1,
///     target: "biceps".to_string(),
///     goal_value: 40.0,
///     goal_progress: 35.0,
///     completed: false,
///     progress_notes: vec![],
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let output = format!("{}", Goals(vec![goal]));
/// assert!(output.contains("biceps"));
/// assert_eq!(format!("{}", Goals(vec![])), "No goals found.\n");
/// ```
pub struct Goals(pub Vec<Goal>);

impl Goals {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of goals in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get a reference to the goal at the given index.
    pub fn get(&self, index: usize) -> Option<&Goal> {
        self.0.get(index)
    }

    /// Get an iterator over the goals.
    pub fn iter(&self) -> std::slice::Iter<'_, Goal> {
        self.0.iter()
    }
}

impl Index<usize> for Goals {
    type Output = Goal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl IntoIterator for Goals {
    type Item = Goal;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Goals {
    type Item = &'a Goal;
    type IntoIter = std::slice::Iter<'a, Goal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Goals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No goals found.");
        }

        for (position, goal) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** (ID: {}) {} - {}",
                position + 1,
                goal.target,
                goal.id,
                goal.status_label(),
                goal.progress_label()
            )?;
        }
        Ok(())
    }
}
