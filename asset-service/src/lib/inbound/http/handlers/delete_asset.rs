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
use crate::domain::user::models::UserId;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

/// `{"<user id>": "<name>", "status": "<soft|hard> deleted"}`
pub type DeleteAssetResponseData = BTreeMap<String, String>;

pub async fn soft_delete_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<DeleteAssetResponseData>, ApiError> {
    let name = AssetName::new(name).map_err(AssetError::from)?;

    state
        .asset_service
        .soft_delete_asset(user.user_id, &name)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        deleted_response(user.user_id, &name, "soft deleted"),
    ))
}

pub async fn hard_delete_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
) -> Result<ApiSuccess<DeleteAssetResponseData>, ApiError> {
    let name = AssetName::new(name).map_err(AssetError::from)?;

    state
        .asset_service
        .hard_delete_asset(user.user_id, &name)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        deleted_response(user.user_id, &name, "hard deleted"),
    ))
}

fn deleted_response(user_id: UserId, name: &AssetName, status: &str) -> DeleteAssetResponseData {
    BTreeMap::from([
        (user_id.to_string(), name.to_string()),
        ("status".to_string(), status.to_string()),
    ])
}
