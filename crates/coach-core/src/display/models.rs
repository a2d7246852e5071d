//! Display implementations for domain models.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{models::Goal, plan::CacheStats};

impl Goal {
    /// Status marker used in headers and list lines.
    pub(crate) fn status_label(&self) -> &'static str {
        if self.completed {
            "✓ Completed"
        } else {
            "○ In Progress"
        }
    }

    /// `progress / value`, with a percentage when the value is non-zero.
    pub(crate) fn progress_label(&self) -> String {
        match self.progress_fraction() {
            Some(fraction) => format!(
                "{} / {} ({:.0}%)",
                self.goal_progress,
                self.goal_value,
                fraction * 100.0
            ),
            None => format!("{} / {}", self.goal_progress, self.goal_value),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.target)?;
        writeln!(f)?;

        writeln!(f, "- Status: {}", self.status_label())?;
        writeln!(f, "- Progress: {}", self.progress_label())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.progress_notes.is_empty() {
            writeln!(f, "\n## Progress Notes")?;
            writeln!(f)?;
            for (index, note) in self.progress_notes.iter().enumerate() {
                writeln!(f, "{}. {note}", index + 1)?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cache statistics:")?;
        writeln!(f, "- Entries: {}", self.entries)?;
        writeln!(f, "- Hits: {}", self.hits)?;
        writeln!(f, "- Misses: {}", self.misses)
    }
}
