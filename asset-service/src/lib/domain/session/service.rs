use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use chrono::Utc;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionStatus;
use crate::domain::session::models::SessionToken;
use crate::domain::session::ports::SessionRepository;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for session operations.
///
/// Keeps at most one active session per user and expires sessions lazily,
/// when they are next presented.
pub struct SessionService<SR>
where
    SR: SessionRepository,
{
    repository: Arc<SR>,
    ttl: Duration,
}

impl<SR> SessionService<SR>
where
    SR: SessionRepository,
{
    /// Create a new session service.
    ///
    /// # Arguments
    /// * `repository` - Session persistence implementation
    /// * `ttl` - Lifetime of newly created sessions
    pub fn new(repository: Arc<SR>, ttl: Duration) -> Self {
        Self { repository, ttl }
    }
}

#[async_trait]
impl<SR> SessionServicePort for SessionService<SR>
where
    SR: SessionRepository,
{
    async fn create_session(
        &self,
        user_id: UserId,
        token: SessionToken,
        ip_address: String,
    ) -> Result<Session, SessionError> {
        let session = Session::new_active(token, user_id, ip_address, Utc::now(), self.ttl);

        self.repository.replace_active(&session).await?;

        tracing::info!(
            user_id = %user_id,
            ip_address = %session.ip_address,
            expires_at = %session.expires_at,
            "Session created"
        );

        Ok(session)
    }

    async fn validate_session(&self, token: &SessionToken) -> Result<UserId, SessionError> {
        let session = self
            .repository
            .find_by_token(token)
            .await?
            .ok_or(SessionError::NotFound)?;

        match session.status_at(Utc::now()) {
            SessionStatus::Valid => Ok(session.user_id),
            SessionStatus::Inactive => Err(SessionError::Inactive),
            SessionStatus::Expired => {
                // Best effort: the call is rejected whatever the write does.
                if let Err(e) = self.repository.deactivate(token).await {
                    tracing::error!(
                        user_id = %session.user_id,
                        error = %e,
                        "Failed to deactivate expired session"
                    );
                }
                Err(SessionError::Expired)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestSessionRepository {}

        #[async_trait]
        impl SessionRepository for TestSessionRepository {
            async fn replace_active(&self, session: &Session) -> Result<(), SessionError>;
            async fn find_by_token(&self, token: &SessionToken) -> Result<Option<Session>, SessionError>;
            async fn deactivate(&self, token: &SessionToken) -> Result<(), SessionError>;
        }
    }

    fn stored_session(expires_in: Duration, active: bool) -> Session {
        Session {
            token: SessionToken::new("stored-token"),
            user_id: UserId(42),
            expires_at: Utc::now() + expires_in,
            ip_address: "192.168.0.10".to_string(),
            active,
        }
    }

    fn service(repository: MockTestSessionRepository) -> SessionService<MockTestSessionRepository> {
        SessionService::new(Arc::new(repository), Duration::hours(24))
    }

    #[tokio::test]
    async fn test_create_session_replaces_active() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_replace_active()
            .withf(|session| {
                session.active
                    && session.user_id == UserId(42)
                    && session.token.as_str() == "new-token"
                    && session.ip_address == "10.1.2.3"
            })
            .times(1)
            .returning(|_| Ok(()));

        let before = Utc::now();
        let session = service(repository)
            .create_session(
                UserId(42),
                SessionToken::new("new-token"),
                "10.1.2.3".to_string(),
            )
            .await
            .expect("Failed to create session");

        assert!(session.expires_at >= before + Duration::hours(24));
        assert!(session.expires_at <= Utc::now() + Duration::hours(24));
    }

    #[tokio::test]
    async fn test_create_session_propagates_storage_failure() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_replace_active()
            .times(1)
            .returning(|_| Err(SessionError::DatabaseError("connection reset".to_string())));

        let result = service(repository)
            .create_session(UserId(1), SessionToken::new("t"), "127.0.0.1".to_string())
            .await;

        assert!(matches!(result, Err(SessionError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_validate_active_session_returns_user() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(Some(stored_session(Duration::hours(1), true))));
        repository.expect_deactivate().times(0);

        let result = service(repository)
            .validate_session(&SessionToken::new("stored-token"))
            .await;

        assert_eq!(result, Ok(UserId(42)));
    }

    #[tokio::test]
    async fn test_validate_unknown_token() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(repository)
            .validate_session(&SessionToken::new("unknown"))
            .await;

        assert_eq!(result, Err(SessionError::NotFound));
    }

    #[tokio::test]
    async fn test_validate_expired_session_deactivates_it() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(Some(stored_session(-Duration::minutes(5), true))));
        repository
            .expect_deactivate()
            .withf(|token| token.as_str() == "stored-token")
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repository)
            .validate_session(&SessionToken::new("stored-token"))
            .await;

        assert_eq!(result, Err(SessionError::Expired));
    }

    #[tokio::test]
    async fn test_validate_expired_session_fails_even_if_deactivation_fails() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(Some(stored_session(-Duration::minutes(5), true))));
        repository
            .expect_deactivate()
            .times(1)
            .returning(|_| Err(SessionError::DatabaseError("timeout".to_string())));

        let result = service(repository)
            .validate_session(&SessionToken::new("stored-token"))
            .await;

        assert_eq!(result, Err(SessionError::Expired));
    }

    #[tokio::test]
    async fn test_validate_inactive_session() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Ok(Some(stored_session(Duration::hours(1), false))));
        repository.expect_deactivate().times(0);

        let result = service(repository)
            .validate_session(&SessionToken::new("stored-token"))
            .await;

        assert_eq!(result, Err(SessionError::Inactive));
    }

    #[tokio::test]
    async fn test_validate_lookup_failure() {
        let mut repository = MockTestSessionRepository::new();

        repository
            .expect_find_by_token()
            .times(1)
            .returning(|_| Err(SessionError::DatabaseError("pool closed".to_string())));

        let result = service(repository)
            .validate_session(&SessionToken::new("stored-token"))
            .await;

        assert!(matches!(result, Err(SessionError::DatabaseError(_))));
    }
}
