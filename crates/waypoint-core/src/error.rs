//! Error types for the trip planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A mutation was attempted while viewing a shared course
    #[error("Shared course is read-only")]
    SharedReadOnly,
    /// Shortening the date range would drop a day that still holds places
    #[error(
        "Cannot shorten the trip to {day_count} day(s): move places out of the days that would \
         be removed first"
    )]
    CannotShortenDates { day_count: u32 },
    /// Route export needs at least two resolvable places
    #[error("At least 2 places are needed to create a route (found {found})")]
    NeedMoreLocations { found: usize },
    /// Share token could not be decoded into a course snapshot
    #[error("Invalid share token: {reason}")]
    ShareToken { reason: String },
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
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl PlannerError {
    /// Creates a database error with additional context.
    pub fn database(message: &str, source: rusqlite::Error) -> Self {
        Self::Database {
            message: message.to_string(),
            source,
        }
    }

    /// Creates an input validation error for a field.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a share token decode error.
    pub fn share_token(reason: impl Into<String>) -> Self {
        Self::ShareToken {
            reason: reason.into(),
        }
    }
}

/// Extension trait for database-related Results to provide concise error
/// mapping with context.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PlannerError::database(message, e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, PlannerError>;
