// Job description segmentation.
// Remote model first, regex pattern fallback on any failure. Callers only ever see a JobSegments.

pub mod fallback;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod prompts;
pub mod response;
pub mod segmenter;

use thiserror::Error;

use crate::llm_client::LlmError;

pub use models::JobSegments;
pub use segmenter::Segmenter;

/// Why the remote path did not produce a record. Never leaves the segmenter.
#[derive(Debug, Error)]
pub enum SegmentError {
    #[error("no text-generation endpoint configured")]
    Unavailable,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("generated text contains no JSON object")]
    MissingJson,

    #[error("generated JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
