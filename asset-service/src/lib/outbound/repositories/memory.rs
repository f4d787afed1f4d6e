use std::collections::BTreeMap;
use std::collections::HashMap;
use std::ops::Bound;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::asset::errors::AssetError;
use crate::domain::asset::models::Asset;
use crate::domain::asset::models::AssetName;
use crate::domain::asset::ports::AssetRepository;
use crate::domain::health::HealthCheck;
use crate::domain::health::HealthReport;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::Session;
use crate::domain::session::models::SessionToken;
use crate::domain::session::ports::SessionRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Stored asset row, deleted flag included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub data: Vec<u8>,
    pub created_at: DateTime<Utc>,
    pub deleted: bool,
}

#[derive(Default)]
struct MemoryState {
    next_user_id: i64,
    users: BTreeMap<i64, User>,
    sessions: HashMap<String, Session>,
    // Keyed by (owner, name) so a user's rows iterate in name order.
    assets: BTreeMap<(i64, String), AssetRecord>,
}

/// Process-local store implementing every repository port.
///
/// One lock guards all tables, so each operation is atomic with respect to
/// the others. Backs the isolated API tests.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<MemoryState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provision a user with an already hashed password.
    pub async fn insert_user(&self, login: &str, password_hash: &str) -> User {
        let mut state = self.state.lock().await;
        state.next_user_id += 1;

        let user = User {
            id: UserId(state.next_user_id),
            login: login.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        state.users.insert(user.id.as_i64(), user.clone());
        user
    }

    /// Store a session row as-is, bypassing the single-active replacement.
    pub async fn insert_session(&self, session: Session) {
        let mut state = self.state.lock().await;
        state
            .sessions
            .insert(session.token.as_str().to_string(), session);
    }

    pub async fn session(&self, token: &SessionToken) -> Option<Session> {
        self.state.lock().await.sessions.get(token.as_str()).cloned()
    }

    pub async fn sessions_of(&self, user_id: UserId) -> Vec<Session> {
        self.state
            .lock()
            .await
            .sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Store an asset row as-is, bypassing name validation.
    pub async fn insert_asset_record(&self, user_id: UserId, name: &str, record: AssetRecord) {
        self.state
            .lock()
            .await
            .assets
            .insert((user_id.as_i64(), name.to_string()), record);
    }

    /// Raw asset row, including soft-deleted ones.
    pub async fn asset_record(&self, user_id: UserId, name: &str) -> Option<AssetRecord> {
        self.state
            .lock()
            .await
            .assets
            .get(&(user_id.as_i64(), name.to_string()))
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserError> {
        Ok(self
            .state
            .lock()
            .await
            .users
            .values()
            .find(|u| u.login == login)
            .cloned())
    }
}

#[async_trait]
impl SessionRepository for InMemoryStore {
    async fn replace_active(&self, session: &Session) -> Result<(), SessionError> {
        let mut state = self.state.lock().await;

        if !state.users.contains_key(&session.user_id.as_i64()) {
            return Err(SessionError::DatabaseError(format!(
                "user {} does not exist",
                session.user_id
            )));
        }
        if state.sessions.contains_key(session.token.as_str()) {
            return Err(SessionError::DatabaseError(
                "duplicate session token".to_string(),
            ));
        }

        state
            .sessions
            .values_mut()
            .filter(|s| s.user_id == session.user_id)
            .for_each(|s| s.active = false);

        let mut stored = session.clone();
        stored.active = true;
        state
            .sessions
            .insert(stored.token.as_str().to_string(), stored);

        Ok(())
    }

    async fn find_by_token(&self, token: &SessionToken) -> Result<Option<Session>, SessionError> {
        Ok(self.session(token).await)
    }

    async fn deactivate(&self, token: &SessionToken) -> Result<(), SessionError> {
        if let Some(session) = self.state.lock().await.sessions.get_mut(token.as_str()) {
            session.active = false;
        }
        Ok(())
    }
}

#[async_trait]
impl AssetRepository for InMemoryStore {
    async fn list(
        &self,
        user_id: UserId,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Asset>, AssetError> {
        let state = self.state.lock().await;
        let owner = user_id.as_i64();

        Ok(state
            .assets
            .range((Bound::Included((owner, String::new())), Bound::Unbounded))
            .take_while(|((id, _), _)| *id == owner)
            .filter(|(_, record)| !record.deleted)
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|((_, name), record)| Asset {
                name: AssetName::from_stored(name.clone()),
                data: record.data.clone(),
            })
            .collect())
    }

    async fn find(
        &self,
        user_id: UserId,
        name: &AssetName,
    ) -> Result<Option<Vec<u8>>, AssetError> {
        Ok(self
            .state
            .lock()
            .await
            .assets
            .get(&(user_id.as_i64(), name.as_str().to_string()))
            .filter(|record| !record.deleted)
            .map(|record| record.data.clone()))
    }

    async fn insert_if_absent(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError> {
        self.state
            .lock()
            .await
            .assets
            .entry((user_id.as_i64(), name.as_str().to_string()))
            .or_insert_with(|| AssetRecord {
                data: data.to_vec(),
                created_at: Utc::now(),
                deleted: false,
            });
        Ok(())
    }

    async fn upsert(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError> {
        let mut state = self.state.lock().await;
        let now = Utc::now();

        state
            .assets
            .entry((user_id.as_i64(), name.as_str().to_string()))
            .and_modify(|record| {
                record.data = data.to_vec();
                record.created_at = now;
            })
            .or_insert_with(|| AssetRecord {
                data: data.to_vec(),
                created_at: now,
                deleted: false,
            });
        Ok(())
    }

    async fn soft_delete(&self, user_id: UserId, name: &AssetName) -> Result<(), AssetError> {
        if let Some(record) = self
            .state
            .lock()
            .await
            .assets
            .get_mut(&(user_id.as_i64(), name.as_str().to_string()))
        {
            record.deleted = true;
        }
        Ok(())
    }

    async fn hard_delete(&self, user_id: UserId, name: &AssetName) -> Result<(), AssetError> {
        self.state
            .lock()
            .await
            .assets
            .remove(&(user_id.as_i64(), name.as_str().to_string()));
        Ok(())
    }
}

#[async_trait]
impl HealthCheck for InMemoryStore {
    async fn health(&self) -> HealthReport {
        let state = self.state.lock().await;

        let mut report = HealthReport::up("It's healthy");
        report.insert("backend", "memory");
        report.insert("users", state.users.len().to_string());
        report.insert("sessions", state.sessions.len().to_string());
        report.insert("assets", state.assets.len().to_string());
        report
    }
}
