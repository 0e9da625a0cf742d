pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::segmentation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Segmentation API
        .route("/api/v1/jobs/segment", post(handlers::handle_segment))
        .with_state(state)
}
