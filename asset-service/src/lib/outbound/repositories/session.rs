use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionToken;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::models::UserId;

pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    token: String,
    user_id: i64,
    expires_at: DateTime<Utc>,
    ip_address: String,
    active: bool,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            token: SessionToken::new(row.token),
            user_id: UserId(row.user_id),
            expires_at: row.expires_at,
            ip_address: row.ip_address,
            active: row.active,
        }
    }
}

fn database_error(e: sqlx::Error) -> SessionError {
    SessionError::DatabaseError(e.to_string())
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn replace_active(&self, session: &Session) -> Result<(), SessionError> {
        // Dropping `tx` without commit rolls it back.
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        // Serialises concurrent logins of the same user.
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(session.user_id.as_i64())
            .fetch_optional(&mut *tx)
            .await
            .map_err(database_error)?;

        sqlx::query("UPDATE sessions SET active = FALSE WHERE user_id = $1 AND active")
            .bind(session.user_id.as_i64())
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        sqlx::query(
            r#"
            INSERT INTO sessions (token, user_id, expires_at, ip_address, active)
            VALUES ($1, $2, $3, $4, TRUE)
            "#,
        )
        .bind(session.token.as_str())
        .bind(session.user_id.as_i64())
        .bind(session.expires_at)
        .bind(&session.ip_address)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)
    }

    async fn find_by_token(&self, token: &SessionToken) -> Result<Option<Session>, SessionError> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT token, user_id, expires_at, ip_address, active
            FROM sessions
            WHERE token = $1
            "#,
        )
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Session::from))
    }

    async fn deactivate(&self, token: &SessionToken) -> Result<(), SessionError> {
        sqlx::query("UPDATE sessions SET active = FALSE WHERE token = $1")
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }
}
