use axum::{routing::get, Json, Router};
use serde::Serialize;
use tracing::info;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthCheck {
    status: &'static str,
    version: &'static str,
    ai_models_status: &'static str,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(health))
}

async fn health() -> Json<HealthCheck> {
    info!("GET /health - Health check");
    Json(HealthCheck {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        ai_models_status: "operational",
    })
}
