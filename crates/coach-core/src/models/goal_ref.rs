//! Loosely typed goal identifiers as they arrive from callers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};

/// A goal identifier before validation.
///
/// Callers hand identifiers over in whatever shape they parsed them in: an
/// unsigned id, a signed number, or raw text from a command line or payload.
/// [`GoalRef::to_id`] performs the single coercion to a catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GoalRef {
    /// An already unsigned identifier
    Id(u64),
    /// A signed number, possibly negative
    Signed(i64),
    /// Raw text such as `"12"` or `" 7 "`
    Text(String),
}

impl GoalRef {
    /// Coerces the reference into a non-negative integer id.
    ///
    /// Text is trimmed and parsed as an unsigned integer, so every id that
    /// fits in a `u64` is accepted however it was typed. Anything unparsable
    /// or negative fails with [`CoachError::InvalidId`] carrying the raw
    /// input.
    pub fn to_id(&self) -> Result<u64> {
        match self {
            GoalRef::Id(id) => Ok(*id),
            GoalRef::Signed(value) => u64::try_from(*value).map_err(|_| self.invalid()),
            GoalRef::Text(text) => text.trim().parse::<u64>().map_err(|_| self.invalid()),
        }
    }

    fn invalid(&self) -> CoachError {
        CoachError::InvalidId {
            raw: self.to_string(),
        }
    }
}

impl fmt::Display for GoalRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalRef::Id(id) => write!(f, "{id}"),
            GoalRef::Signed(value) => write!(f, "{value}"),
            GoalRef::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u64> for GoalRef {
    fn from(id: u64) -> Self {
        GoalRef::Id(id)
    }
}

impl From<u32> for GoalRef {
    fn from(id: u32) -> Self {
        GoalRef::Id(u64::from(id))
    }
}

impl From<i64> for GoalRef {
    fn from(value: i64) -> Self {
        GoalRef::Signed(value)
    }
}

impl From<i32> for GoalRef {
    fn from(value: i32) -> Self {
        GoalRef::Signed(i64::from(value))
    }
}

impl From<&str> for GoalRef {
    fn from(text: &str) -> Self {
        GoalRef::Text(text.to_string())
    }
}

impl From<String> for GoalRef {
    fn from(text: String) -> Self {
        GoalRef::Text(text)
    }
}

impl From<&String> for GoalRef {
    fn from(text: &String) -> Self {
        GoalRef::Text(text.clone())
    }
}
