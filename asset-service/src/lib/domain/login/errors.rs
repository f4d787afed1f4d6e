use thiserror::Error;

use crate::domain::session::errors::SessionError;
use crate::domain::user::errors::UserError;

/// Error for the login flow.
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    /// Unknown login or wrong password; callers must not tell them apart.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Session could not be stored: {0}")]
    SessionNotPersisted(SessionError),

    #[error("User lookup failed: {0}")]
    UserLookup(#[from] UserError),
}
