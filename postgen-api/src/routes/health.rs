//! Liveness endpoints

use axum::{response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
struct RootResponse {
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct HeartbeatResponse {
    status: &'static str,
}

/// Static marker that the process is up
async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Service is running",
    })
}

async fn heartbeat() -> Json<HeartbeatResponse> {
    Json(HeartbeatResponse { status: "OK" })
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/heartbeat", get(heartbeat))
}
