//! Error types for the coach library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all catalog and plan operations.
#[derive(Error, Debug)]
pub enum CoachError {
    /// Identifier is not a non-negative integer
    #[error("Invalid goal id: {raw}")]
    InvalidId { raw: String },
    /// Identifier is well-formed but absent from the plan
    #[error("Goal with id {id} not found in plan")]
    NotInPlan { id: u64 },
    /// Identifier is already present in the plan
    #[error("Goal with id {id} already exists in the plan")]
    DuplicateEntry { id: u64 },
    /// Identifier does not resolve to any goal in the catalog
    #[error("Goal with id {id} not found in catalog")]
    NotFound { id: u64 },
    /// Operation requires a non-empty plan
    #[error("Plan is empty")]
    EmptyPlan,
    /// Reorder target outside the plan
    #[error("Invalid plan position {position}: plan has {len} goals")]
    InvalidPosition { position: usize, len: usize },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CoachError {
        CoachError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> CoachError {
        CoachError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl CoachError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for failures caused by the request itself, which a
    /// caller can report and carry on from, as opposed to failures of the
    /// catalog or its storage.
    pub fn is_plan_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidId { .. }
                | Self::NotInPlan { .. }
                | Self::DuplicateEntry { .. }
                | Self::NotFound { .. }
                | Self::EmptyPlan
                | Self::InvalidPosition { .. }
                | Self::InvalidInput { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CoachError::database(message).with_source(e))
    }
}

/// Result type alias for coach operations
pub type Result<T> = std::result::Result<T, CoachError>;
