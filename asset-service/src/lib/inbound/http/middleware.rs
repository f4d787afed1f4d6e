use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use super::handlers::INVALID_TOKEN;
use crate::domain::session::errors::SessionError;
use crate::domain::session::models::SessionToken;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Request extension carrying the owner of a validated session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that resolves the bearer token to a user and adds it to request extensions.
///
/// Every rejection answers with the same 401 body; the reason is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req)?;

    let user_id = state
        .session_service
        .validate_session(&token)
        .await
        .map_err(|e| {
            match &e {
                SessionError::DatabaseError(_) => {}
                _ => tracing::warn!(token = ?token, reason = %e, "Session rejected"),
            }
            ApiError::from(e).into_response()
        })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<SessionToken, Response> {
    let unauthorized = || ApiError::Unauthorized(INVALID_TOKEN.to_string()).into_response();

    let header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            unauthorized()
        })?;

    let value = header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid ASCII");
        unauthorized()
    })?;

    match value.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(SessionToken::new(token)),
        _ => {
            tracing::warn!("Authorization header is not a bearer token");
            Err(unauthorized())
        }
    }
}
