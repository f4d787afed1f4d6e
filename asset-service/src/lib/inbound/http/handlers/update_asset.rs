use axum::body::Bytes;
use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use super::ApiSuccess;
use super::StatusResponseData;
use crate::domain::asset::errors::AssetError;
use crate::domain::asset::models::AssetName;
use crate::domain::asset::ports::AssetServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_asset(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<ApiSuccess<StatusResponseData>, ApiError> {
    let name = AssetName::new(name).map_err(AssetError::from)?;

    state
        .asset_service
        .update_asset(user.user_id, &name, &body)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, StatusResponseData::ok()))
}
