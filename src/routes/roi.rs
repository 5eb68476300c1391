use axum::extract::State;
use axum::{routing::post, Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{RoiCalculationRequest, RoiCalculationResponse};
use crate::services::roi_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// POST /api/roi/calculate
async fn calculate(
    State(state): State<AppState>,
    Json(request): Json<RoiCalculationRequest>,
) -> Result<Json<RoiCalculationResponse>, AppError> {
    if request.employee_count < 0 {
        return Err(AppError::Validation("employee_count must be non-negative".to_string()));
    }

    info!(industry = %request.industry, employees = request.employee_count, "calculating ROI");
    Ok(Json(roi_service::calculate_roi(&state.tables, &request)))
}
