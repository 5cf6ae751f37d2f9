use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/live", get(live))
        .route("/ready", get(ready))
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
    uptime: u64,
    timestamp: String,
}

enum StoreStatus {
    Connected,
    Disconnected,
    InMemory,
}

async fn store_status(state: &AppState) -> StoreStatus {
    match state.database() {
        Some(database) => match database.ping().await {
            Ok(()) => StoreStatus::Connected,
            Err(err) => {
                tracing::warn!(error = %err, "database ping failed");
                StoreStatus::Disconnected
            }
        },
        None => StoreStatus::InMemory,
    }
}

async fn root(State(state): State<AppState>) -> Response {
    let store = store_status(&state).await;
    let (status_code, status, database) = match store {
        StoreStatus::Connected => (StatusCode::OK, "ok", "connected"),
        StoreStatus::InMemory => (StatusCode::OK, "ok", "in-memory"),
        StoreStatus::Disconnected => (StatusCode::SERVICE_UNAVAILABLE, "degraded", "disconnected"),
    };

    let body = HealthResponse {
        status,
        database,
        uptime: state.uptime_seconds(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    (status_code, Json(body)).into_response()
}

async fn live() -> StatusCode {
    StatusCode::OK
}

async fn ready(State(state): State<AppState>) -> StatusCode {
    match store_status(&state).await {
        StoreStatus::Connected | StoreStatus::InMemory => StatusCode::OK,
        StoreStatus::Disconnected => StatusCode::SERVICE_UNAVAILABLE,
    }
}
