//! Public liveness route

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(home))
}

/// GET / - liveness check
async fn home() -> Json<StatusResponse> {
    Json(StatusResponse { success: true })
}
