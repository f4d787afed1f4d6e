use async_trait::async_trait;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionToken;
use crate::domain::user::models::UserId;

/// Port for session lifecycle operations.
#[async_trait]
pub trait SessionServicePort: Send + Sync + 'static {
    /// Open a new active session for a user, deactivating any previous one.
    ///
    /// # Arguments
    /// * `user_id` - Owner of the session
    /// * `token` - Freshly generated token identifying the session
    /// * `ip_address` - Client address recorded with the session
    ///
    /// # Returns
    /// The stored session
    ///
    /// # Errors
    /// * `DatabaseError` - The replacement transaction failed; nothing changed
    async fn create_session(
        &self,
        user_id: UserId,
        token: SessionToken,
        ip_address: String,
    ) -> Result<Session, SessionError>;

    /// Resolve a token to its user, expiring the session lazily.
    ///
    /// # Returns
    /// Owner of the session when it is active and unexpired
    ///
    /// # Errors
    /// * `NotFound` - No session with this token
    /// * `Expired` - Session was active but past its expiry; it is now deactivated
    /// * `Inactive` - Session was already deactivated
    /// * `DatabaseError` - Lookup failed
    async fn validate_session(&self, token: &SessionToken) -> Result<UserId, SessionError>;
}

/// Persistence operations for sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync + 'static {
    /// Atomically deactivate every session of `session.user_id` and insert `session`.
    ///
    /// Either both steps are committed or neither is.
    ///
    /// # Errors
    /// * `DatabaseError` - Transaction failed and was rolled back
    async fn replace_active(&self, session: &Session) -> Result<(), SessionError>;

    /// Retrieve a session by token.
    ///
    /// # Returns
    /// Optional session (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_token(&self, token: &SessionToken) -> Result<Option<Session>, SessionError>;

    /// Mark a session inactive. Succeeds when already inactive or absent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn deactivate(&self, token: &SessionToken) -> Result<(), SessionError>;
}
