//! Result wrapper types for displaying operation outcomes.

use std::fmt;

/// Operation feedback rendered to the user.
///
/// `Notice` covers the silent-fallback paths (a bad share token, a no-op on a
/// missing id) that are not failures of the planner itself.
pub enum OperationStatus {
    /// The operation applied and persisted
    Success(String),
    /// Nothing matched and nothing changed
    Notice(String),
    /// The operation was rejected
    Failure(String),
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Create a new informational notice.
    pub fn notice(message: impl Into<String>) -> Self {
        Self::Notice(message.into())
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(message) => writeln!(f, "Success: {message}"),
            Self::Notice(message) => writeln!(f, "{message}"),
            Self::Failure(message) => writeln!(f, "Error: {message}"),
        }
    }
}

/// A share token with its optional full URL, presented for manual copying.
pub struct ShareLink {
    pub token: String,
    pub url: Option<String>,
}

impl fmt::Display for ShareLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Share")?;
        writeln!(f)?;
        if let Some(url) = &self.url {
            writeln!(f, "Copy this link:")?;
            writeln!(f)?;
            writeln!(f, "{url}")?;
            writeln!(f)?;
        }
        writeln!(f, "Token: {}", self.token)
    }
}
