use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::User;

/// Read access to registered users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by login.
    ///
    /// # Arguments
    /// * `login` - Login name to search for
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_login(&self, login: &str) -> Result<Option<User>, UserError>;
}
