use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::domain::asset::errors::AssetError;
use crate::domain::login::errors::LoginError;
use crate::domain::session::errors::SessionError;

pub mod delete_asset;
pub mod get_asset;
pub mod health;
pub mod list_assets;
pub mod login;
pub mod update_asset;
pub mod upload_asset;

pub const INVALID_CREDENTIALS: &str = "invalid login/password";
pub const INVALID_TOKEN: &str = "invalid authorization token";
pub const ASSET_NOT_FOUND: &str = "asset not found";
pub const INVALID_PAYLOAD: &str = "invalid request payload";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// Successful JSON response; the payload is the whole body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiSuccess<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.data)).into_response()
    }
}

/// Body of mutating asset endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponseData {
    pub status: String,
}

impl StatusResponseData {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Log the detail and hide it from the client.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "Request failed");
        ApiError::InternalServerError(INTERNAL_ERROR.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::NotFound(msg)
            | ApiError::InternalServerError(msg) => msg,
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        match err {
            AssetError::InvalidName(e) => ApiError::BadRequest(e.to_string()),
            AssetError::NotFound(_) => ApiError::NotFound(ASSET_NOT_FOUND.to_string()),
            AssetError::DatabaseError(_) => ApiError::internal(err),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::InvalidCredentials | LoginError::SessionNotPersisted(_) => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            LoginError::UserLookup(_) => ApiError::internal(err),
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        if err.is_unauthorized() {
            ApiError::Unauthorized(INVALID_TOKEN.to_string())
        } else {
            ApiError::internal(err)
        }
    }
}
