use thiserror::Error;

/// Error for session creation and validation.
///
/// `NotFound`, `Expired` and `Inactive` all mean "unauthorized" to clients;
/// they stay distinct for logging.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found")]
    NotFound,

    #[error("Session expired")]
    Expired,

    #[error("Session inactive")]
    Inactive,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl SessionError {
    /// Whether the error is a rejected token rather than a storage failure.
    pub fn is_unauthorized(&self) -> bool {
        !matches!(self, SessionError::DatabaseError(_))
    }
}
