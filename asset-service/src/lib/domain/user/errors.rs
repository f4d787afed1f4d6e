use thiserror::Error;

/// Error for user lookups.
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
