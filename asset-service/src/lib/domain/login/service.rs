use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::domain::login::errors::LoginError;
use crate::domain::login::ports::LoginServicePort;
use crate::domain::session::models::SessionToken;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::ports::UserRepository;

/// Login flow: user lookup, password check, token, session.
pub struct LoginService<UR, SS>
where
    UR: UserRepository,
    SS: SessionServicePort,
{
    users: Arc<UR>,
    sessions: Arc<SS>,
    authenticator: Arc<Authenticator>,
    issue_token_on_failure: bool,
    /// Digest checked in place of a stored one when the login is unknown.
    dummy_hash: String,
}

const DUMMY_PASSWORD: &str = "unknown-login-placeholder";

impl<UR, SS> LoginService<UR, SS>
where
    UR: UserRepository,
    SS: SessionServicePort,
{
    /// Create a new login service.
    ///
    /// # Arguments
    /// * `users` - User lookup implementation
    /// * `sessions` - Session lifecycle service
    /// * `authenticator` - Password verification and token generation
    /// * `issue_token_on_failure` - Return the token even when the session
    ///   could not be stored (such a token never validates)
    pub fn new(
        users: Arc<UR>,
        sessions: Arc<SS>,
        authenticator: Arc<Authenticator>,
        issue_token_on_failure: bool,
    ) -> Self {
        let dummy_hash = authenticator
            .hash_password(DUMMY_PASSWORD)
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to hash placeholder password");
                String::new()
            });

        Self {
            users,
            sessions,
            authenticator,
            issue_token_on_failure,
            dummy_hash,
        }
    }
}

#[async_trait]
impl<UR, SS> LoginServicePort for LoginService<UR, SS>
where
    UR: UserRepository,
    SS: SessionServicePort,
{
    async fn login(
        &self,
        login: &str,
        password: &str,
        ip_address: String,
    ) -> Result<SessionToken, LoginError> {
        let user = self.users.find_by_login(login).await?;

        let (stored_hash, identity) = match &user {
            Some(user) => (user.password_hash.clone(), user.login.clone()),
            None => (self.dummy_hash.clone(), login.to_string()),
        };
        let authenticator = Arc::clone(&self.authenticator);
        let password = password.to_string();

        let outcome = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &identity)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password check task failed");
            LoginError::InvalidCredentials
        })?;

        let user = user.ok_or(LoginError::InvalidCredentials)?;

        let result = outcome.map_err(|e| match e {
            AuthenticationError::InvalidCredentials => LoginError::InvalidCredentials,
            AuthenticationError::PasswordError(err) => {
                tracing::error!(user_id = %user.id, error = %err, "Password check failed");
                LoginError::InvalidCredentials
            }
        })?;

        let token = SessionToken::new(result.token);

        match self
            .sessions
            .create_session(user.id, token.clone(), ip_address)
            .await
        {
            Ok(_) => Ok(token),
            Err(e) => {
                tracing::error!(user_id = %user.id, error = %e, "Error creating new session");
                if self.issue_token_on_failure {
                    Ok(token)
                } else {
                    Err(LoginError::SessionNotPersisted(e))
                }
            }
        }
    }
}
