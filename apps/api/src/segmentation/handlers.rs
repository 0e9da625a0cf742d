//! Axum route handlers for the Segmentation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::segmentation::models::JobSegments;
use crate::state::AppState;

/// Longest description accepted, in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 20_000;

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct SegmentResponse {
    pub segments: JobSegments,
}

/// POST /api/v1/jobs/segment
///
/// Splits a free-text job posting into structured fields for the "post a job" form.
pub async fn handle_segment(
    State(state): State<AppState>,
    Json(request): Json<SegmentRequest>,
) -> Result<Json<SegmentResponse>, AppError> {
    if request.description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }
    if request.description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(AppError::Validation(format!(
            "description cannot exceed {MAX_DESCRIPTION_CHARS} characters"
        )));
    }

    let segments = state.segmenter.segment(&request.description).await;

    Ok(Json(SegmentResponse { segments }))
}
