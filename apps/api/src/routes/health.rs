use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and segmentation mode.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let segmentation = if state.segmenter.has_remote() {
        "remote"
    } else {
        "fallback"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobboard-api",
        "segmentation": segmentation,
        "model": state.config.generation.model_id,
    }))
}
