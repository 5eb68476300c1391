use axum::extract::State;
use axum::{routing::post, Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{SkillsAssessmentRequest, TrainingRecommendationsResponse};
use crate::services::training_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/recommendations", post(recommendations))
}

/// POST /api/training/recommendations
async fn recommendations(
    State(state): State<AppState>,
    Json(request): Json<SkillsAssessmentRequest>,
) -> Result<Json<TrainingRecommendationsResponse>, AppError> {
    info!(industry = %request.current_industry, "building training recommendations");
    Ok(Json(training_service::recommendations(&state.tables, &request)))
}
