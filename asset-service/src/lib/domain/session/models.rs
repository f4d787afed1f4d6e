use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::user::models::UserId;

/// Session lifetime when none is configured.
pub const DEFAULT_SESSION_TTL_HOURS: i64 = 24;

/// Opaque bearer token identifying a session row.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Tokens are credentials; keep them out of logs.
impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(6).collect();
        write!(f, "SessionToken({}…)", prefix)
    }
}

/// Server-side session record.
///
/// Lifecycle is one-way: created active, later deactivated, never reactivated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub expires_at: DateTime<Utc>,
    pub ip_address: String,
    pub active: bool,
}

/// Outcome of checking a session at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Valid,
    Expired,
    Inactive,
}

impl Session {
    /// Build a fresh active session expiring `ttl` after `issued_at`.
    pub fn new_active(
        token: SessionToken,
        user_id: UserId,
        ip_address: String,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            token,
            user_id,
            expires_at: issued_at + ttl,
            ip_address,
            active: true,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Classify the session at `now`. An inactive row stays inactive even
    /// if its expiry is still ahead.
    pub fn status_at(&self, now: DateTime<Utc>) -> SessionStatus {
        if !self.active {
            SessionStatus::Inactive
        } else if self.is_expired_at(now) {
            SessionStatus::Expired
        } else {
            SessionStatus::Valid
        }
    }
}
