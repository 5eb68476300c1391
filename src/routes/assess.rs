use axum::extract::State;
use axum::{routing::post, Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{SkillsAssessmentRequest, SkillsAssessmentResponse};
use crate::services::assessment_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(assess))
}

/// POST /api/assess - Score a skills profile against the target industry
async fn assess(
    State(state): State<AppState>,
    Json(request): Json<SkillsAssessmentRequest>,
) -> Result<Json<SkillsAssessmentResponse>, AppError> {
    if request.current_industry.trim().is_empty() {
        return Err(AppError::Validation("current_industry is required".to_string()));
    }

    info!(industry = %request.current_industry, "processing assessment");
    Ok(Json(assessment_service::assess_skills(&state.tables, &request)))
}
