use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_asset::hard_delete_asset;
use super::handlers::delete_asset::soft_delete_asset;
use super::handlers::get_asset::get_asset;
use super::handlers::health::health;
use super::handlers::list_assets::list_assets;
use super::handlers::login::login;
use super::handlers::update_asset::update_asset;
use super::handlers::upload_asset::upload_asset;
use super::middleware::authenticate as auth_middleware;
use crate::config::SessionConfig;
use crate::domain::asset::ports::AssetRepository;
use crate::domain::asset::ports::AssetServicePort;
use crate::domain::asset::service::AssetService;
use crate::domain::health::HealthCheck;
use crate::domain::login::ports::LoginServicePort;
use crate::domain::login::service::LoginService;
use crate::domain::session::ports::SessionRepository;
use crate::domain::session::ports::SessionServicePort;
use crate::domain::session::service::SessionService;
use crate::domain::user::ports::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub login_service: Arc<dyn LoginServicePort>,
    pub session_service: Arc<dyn SessionServicePort>,
    pub asset_service: Arc<dyn AssetServicePort>,
    pub health_check: Arc<dyn HealthCheck>,
}

impl AppState {
    /// Wire the domain services on top of the given adapters.
    pub fn new<UR, SR, AR, HC>(
        users: Arc<UR>,
        sessions: Arc<SR>,
        assets: Arc<AR>,
        health_check: Arc<HC>,
        authenticator: Arc<Authenticator>,
        config: &SessionConfig,
    ) -> Self
    where
        UR: UserRepository,
        SR: SessionRepository,
        AR: AssetRepository,
        HC: HealthCheck,
    {
        let session_service = Arc::new(SessionService::new(sessions, config.ttl()));
        let login_service = Arc::new(LoginService::new(
            users,
            Arc::clone(&session_service),
            authenticator,
            config.issue_token_on_failure,
        ));

        Self {
            login_service,
            session_service,
            asset_service: Arc::new(AssetService::new(assets)),
            health_check,
        }
    }
}

pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    let public_routes = Router::new()
        .route("/api/auth", post(login))
        .route("/health", get(health));

    let protected_routes = Router::new()
        .route("/api/upload-asset/:name", post(upload_asset))
        .route("/api/update-asset/:name", put(update_asset))
        .route("/api/asset/:name", get(get_asset))
        .route("/api/assets", get(list_assets))
        .route(
            "/api/delete-asset/:name",
            put(soft_delete_asset).delete(hard_delete_asset),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
