use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::asset::errors::AssetError;
use crate::domain::asset::models::Asset;
use crate::domain::asset::models::AssetName;
use crate::domain::asset::models::AssetPage;
use crate::domain::asset::models::PageRequest;
use crate::domain::asset::ports::AssetRepository;
use crate::domain::asset::ports::AssetServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for asset operations.
pub struct AssetService<AR>
where
    AR: AssetRepository,
{
    repository: Arc<AR>,
}

impl<AR> AssetService<AR>
where
    AR: AssetRepository,
{
    /// Create a new asset service.
    ///
    /// # Arguments
    /// * `repository` - Asset persistence implementation
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AssetServicePort for AssetService<AR>
where
    AR: AssetRepository,
{
    async fn list_assets(
        &self,
        user_id: UserId,
        page: PageRequest,
    ) -> Result<AssetPage, AssetError> {
        let assets = self
            .repository
            .list(user_id, page.offset(), page.limit())
            .await?;

        Ok(AssetPage::new(page, assets))
    }

    async fn get_asset(&self, user_id: UserId, name: &AssetName) -> Result<Asset, AssetError> {
        self.repository
            .find(user_id, name)
            .await?
            .map(|data| Asset {
                name: name.clone(),
                data,
            })
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }

    async fn upload_asset(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError> {
        self.repository.insert_if_absent(user_id, name, data).await?;
        tracing::debug!(user_id = %user_id, asset = %name, bytes = data.len(), "Asset uploaded");
        Ok(())
    }

    async fn update_asset(
        &self,
        user_id: UserId,
        name: &AssetName,
        data: &[u8],
    ) -> Result<(), AssetError> {
        self.repository.upsert(user_id, name, data).await?;
        tracing::debug!(user_id = %user_id, asset = %name, bytes = data.len(), "Asset updated");
        Ok(())
    }

    async fn soft_delete_asset(
        &self,
        user_id: UserId,
        name: &AssetName,
    ) -> Result<(), AssetError> {
        self.repository.soft_delete(user_id, name).await
    }

    async fn hard_delete_asset(
        &self,
        user_id: UserId,
        name: &AssetName,
    ) -> Result<(), AssetError> {
        self.repository.hard_delete(user_id, name).await
    }
}
