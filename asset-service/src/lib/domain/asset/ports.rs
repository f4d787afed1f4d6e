use async_trait::async_trait;

use crate::domain::asset::errors::AssetError;
use crate::domain::asset::models::Asset;
use crate::domain::asset::models::AssetName;
use crate::domain::asset::models::AssetPage;
use crate::domain::asset::models::PageRequest;
use crate::domain::user::models::UserId;

/// Port for asset domain service operations.
///
/// Every operation is scoped to the owning user.
#[async_trait]
pub trait AssetServicePort: Send + Sync + 'static {
    /// List live assets of a user, one page at a time, ordered by name.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_assets(&self, user_id: UserId, page: PageRequest)
        -> Result<AssetPage, AssetError>;

    /// Fetch the payload of a live asset.
    ///
    /// # Errors
    /// * `NotFound` - Asset does not exist, is soft-deleted or belongs to someone else
    /// * `DatabaseError` - Database operation failed
    async fn get_asset(&self, user_id: UserId, name: &AssetName) -> Result<Asset, AssetError>;

    /// Store a new asset. An existing asset with the same name is left untouched.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upload_asset(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError>;

    /// Create or replace an asset, refreshing its creation time.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn update_asset(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError>;

    /// Flag an asset as deleted, keeping its row. Idempotent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn soft_delete_asset(&self, user_id: UserId, name: &AssetName)
        -> Result<(), AssetError>;

    /// Remove an asset row whatever its deleted flag. Idempotent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn hard_delete_asset(&self, user_id: UserId, name: &AssetName)
        -> Result<(), AssetError>;
}

/// Persistence operations for assets.
#[async_trait]
pub trait AssetRepository: Send + Sync + 'static {
    /// Live assets of a user ordered by name.
    async fn list(&self, user_id: UserId, offset: i64, limit: i64)
        -> Result<Vec<Asset>, AssetError>;

    /// Payload of a live asset (None if absent or soft-deleted).
    async fn find(&self, user_id: UserId, name: &AssetName)
        -> Result<Option<Vec<u8>>, AssetError>;

    /// Insert unless (name, user) already exists; a conflict is not an error.
    async fn insert_if_absent(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError>;

    /// Insert, or overwrite data and created_at on conflict.
    async fn upsert(&self, user_id: UserId, name: &AssetName, data: &[u8])
        -> Result<(), AssetError>;

    /// Set the deleted flag. No matching row is not an error.
    async fn soft_delete(&self, user_id: UserId, name: &AssetName) -> Result<(), AssetError>;

    /// Delete the row. No matching row is not an error.
    async fn hard_delete(&self, user_id: UserId, name: &AssetName) -> Result<(), AssetError>;
}
