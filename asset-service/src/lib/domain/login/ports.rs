use async_trait::async_trait;

use crate::domain::login::errors::LoginError;
use crate::domain::session::models::SessionToken;

/// Port for exchanging credentials for a session token.
#[async_trait]
pub trait LoginServicePort: Send + Sync + 'static {
    /// Verify credentials and open a new session.
    ///
    /// # Arguments
    /// * `login` - Login name
    /// * `password` - Plaintext password
    /// * `ip_address` - Client address recorded with the session
    ///
    /// # Returns
    /// Bearer token of the new session
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown login or wrong password
    /// * `SessionNotPersisted` - Session storage failed (strict mode only)
    /// * `UserLookup` - User lookup failed
    async fn login(
        &self,
        login: &str,
        password: &str,
        ip_address: String,
    ) -> Result<SessionToken, LoginError>;
}
