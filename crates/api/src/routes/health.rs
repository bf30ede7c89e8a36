use axum::http::StatusCode;
use axum::{routing::get, Router};

use crate::state::AppState;

/// GET /health -- liveness probe, 200 with an empty body.
async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Mount health check routes.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
