use std::collections::BTreeMap;

use axum::extract::State;
use axum::http::StatusCode;

use super::ApiSuccess;
use crate::domain::health::HealthCheck;
use crate::inbound::http::router::AppState;

pub async fn health(State(state): State<AppState>) -> ApiSuccess<BTreeMap<String, String>> {
    let report = state.health_check.health().await;

    let status = if report.is_up() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    ApiSuccess::new(status, report.into_map())
}
