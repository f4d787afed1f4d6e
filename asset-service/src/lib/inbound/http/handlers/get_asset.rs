use std::collections::BTreeMap;

use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::asset::errors::AssetError;
use crate::domain::asset::models::AssetName;
use crate::domain::asset::ports::AssetServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// Body is a single entry: asset name to display text.
pub type GetAssetResponseData = BTreeMap<String, String>;

pub async fn get_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<GetAssetResponseData>, ApiError> {
    let name = AssetName::new(name).map_err(AssetError::from)?;

    let asset = state
        .asset_service
        .get_asset(user.user_id, &name)
        .await
        .map_err(ApiError::from)?;

    let text = asset.display_text();
    Ok(ApiSuccess::new(
        StatusCode::OK,
        BTreeMap::from([(asset.name.to_string(), text)]),
    ))
}
