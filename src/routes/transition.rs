use axum::extract::{Path, Query, State};
use axum::{routing::get, Json, Router};
use tracing::info;

use crate::errors::AppError;
use crate::models::{CareerTransitionResponse, TransitionQuery};
use crate::services::transition_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/:employee_id/:target_industry", get(predict))
}

/// GET /api/transition/:employee_id/:target_industry
async fn predict(
    Path((employee_id, target_industry)): Path<(String, String)>,
    Query(query): Query<TransitionQuery>,
    State(state): State<AppState>,
) -> Result<Json<CareerTransitionResponse>, AppError> {
    let skills: Vec<String> = query
        .skills
        .as_deref()
        .map(|s| {
            s.split(',')
                .map(|skill| skill.trim().to_string())
                .filter(|skill| !skill.is_empty())
                .collect()
        })
        .unwrap_or_default();

    info!(
        employee = %employee_id,
        from = %query.current_industry,
        to = %target_industry,
        "predicting transition"
    );

    Ok(Json(transition_service::predict_transition(
        &state.tables,
        &query.current_industry,
        &target_industry,
        &skills,
    )))
}
