use thiserror::Error;

/// Error for AssetName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssetNameError {
    #[error("Asset name must not be empty")]
    Empty,

    #[error("Asset name too long: maximum {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Asset name contains control characters")]
    InvalidCharacters,
}

/// Top-level error for all asset operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("Invalid asset name: {0}")]
    InvalidName(#[from] AssetNameError),

    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
