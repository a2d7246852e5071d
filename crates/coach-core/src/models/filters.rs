//! Filter types for querying the goal catalog.

/// Completion filter for goal listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionFilter {
    /// Only goals marked complete
    Completed,
    /// Only goals not yet complete
    Pending,
}

impl CompletionFilter {
    /// The stored `completed` flag this filter selects.
    pub fn as_flag(self) -> bool {
        matches!(self, CompletionFilter::Completed)
    }
}

/// Filter options for listing goals.
#[derive(Debug, Clone, Default)]
pub struct GoalFilter {
    /// Exact target match (case-insensitive)
    pub target: Option<String>,

    /// Restrict by completion flag
    pub completion: Option<CompletionFilter>,

    /// Order by target instead of by id
    pub sort_by_target: bool,
}

impl GoalFilter {
    /// Filter for all goals on one target.
    pub fn for_target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            ..Default::default()
        }
    }
}
