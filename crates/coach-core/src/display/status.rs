//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

/// Completion fraction of a plan, shown as a percentage.
pub struct PlanProgress {
    /// Completed fraction in `[0, 1]`
    pub fraction: f64,
    /// Number of goals in the plan
    pub total: usize,
}

impl PlanProgress {
    pub fn new(fraction: f64, total: usize) -> Self {
        Self { fraction, total }
    }
}

impl fmt::Display for PlanProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = if self.total == 1 { "goal" } else { "goals" };
        writeln!(
            f,
            "Plan progress: {:.1}% of {} {noun} completed",
            self.fraction * 100.0,
            self.total
        )
    }
}
