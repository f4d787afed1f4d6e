use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use asset_service::config::Config;
use asset_service::inbound::http::router::create_router;
use asset_service::inbound::http::router::AppState;
use asset_service::outbound::repositories::PostgresAssetRepository;
use asset_service::outbound::repositories::PostgresHealthCheck;
use asset_service::outbound::repositories::PostgresSessionRepository;
use asset_service::outbound::repositories::PostgresUserRepository;
use auth::Authenticator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "asset_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "asset-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        max_body_bytes = config.server.max_body_bytes,
        session_ttl_hours = config.session.ttl_hours,
        issue_token_on_failure = config.session.issue_token_on_failure,
        password_scheme = %config.auth.password_scheme,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(config.auth.password_scheme));

    let state = AppState::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        Arc::new(PostgresSessionRepository::new(pg_pool.clone())),
        Arc::new(PostgresAssetRepository::new(pg_pool.clone())),
        Arc::new(PostgresHealthCheck::new(pg_pool)),
        authenticator,
        &config.session,
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(state, config.server.max_body_bytes);

    if let Err(e) = axum::serve(
        http_listener,
        http_application.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
