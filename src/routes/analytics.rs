use axum::extract::{Path, State};
use axum::{routing::get, Json, Router};

use crate::models::JobMarketResponse;
use crate::services::analytics_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/job-market/:industry", get(job_market))
}

/// GET /api/analytics/job-market/:industry
async fn job_market(
    Path(industry): Path<String>,
    State(state): State<AppState>,
) -> Json<JobMarketResponse> {
    Json(analytics_service::job_market(&state.tables, &industry))
}
