use std::collections::BTreeMap;

use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::asset::models::AssetPage;
use crate::domain::asset::models::PageRequest;
use crate::domain::asset::ports::AssetServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn list_assets(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Query(params): Query<ListAssetsParams>,
) -> Result<ApiSuccess<ListAssetsResponseData>, ApiError> {
    let request = PageRequest::from_raw(params.page.as_deref(), params.size.as_deref());

    state
        .asset_service
        .list_assets(user.user_id, request)
        .await
        .map_err(ApiError::from)
        .map(|page| ApiSuccess::new(StatusCode::OK, page.into()))
}

/// Raw pagination parameters; parsed leniently by `PageRequest::from_raw`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListAssetsParams {
    page: Option<String>,
    size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAssetsResponseData {
    pub page: i64,
    pub size: i64,
    pub assets: BTreeMap<String, String>,
    pub has_more: bool,
}

impl From<AssetPage> for ListAssetsResponseData {
    fn from(page: AssetPage) -> Self {
        Self {
            page: page.page,
            size: page.size,
            assets: page
                .assets
                .iter()
                .map(|asset| (asset.name.to_string(), asset.display_text()))
                .collect(),
            has_more: page.has_more,
        }
    }
}
