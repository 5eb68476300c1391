use axum::extract::{Path, State};
use axum::{
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::services::automation_engine::{AutomationInsights, EngineStatus, TriggerResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trigger/:job_key", post(trigger))
        .route("/status", get(status))
        .route("/insights", get(insights))
}

/// POST /api/automation/trigger/:job_key - Run one job out of cadence
async fn trigger(
    Path(job_key): Path<String>,
    State(state): State<AppState>,
) -> Json<TriggerResult> {
    info!(job = %job_key, "manual trigger requested");
    Json(state.engine.trigger(&job_key).await)
}

/// GET /api/automation/status
async fn status(State(state): State<AppState>) -> Json<EngineStatus> {
    Json(state.engine.get_status())
}

/// GET /api/automation/insights
async fn insights(State(state): State<AppState>) -> Json<AutomationInsights> {
    Json(state.engine.get_insights())
}
