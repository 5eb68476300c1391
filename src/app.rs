use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{analytics, assess, automation, health, roi, training, transition};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/assess", assess::router())
        .nest("/api/transition", transition::router())
        .nest("/api/roi", roi::router())
        .nest("/api/analytics", analytics::router())
        .nest("/api/training", training::router())
        .nest("/api/automation", automation::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
