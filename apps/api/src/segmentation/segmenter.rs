//! Segmenter — remote-first extraction with a deterministic local fallback.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::llm_client::TextGenerator;
use crate::segmentation::fallback::extract_fallback;
use crate::segmentation::models::JobSegments;
use crate::segmentation::prompts::build_segmentation_prompt;
use crate::segmentation::response::parse_generated_text;
use crate::segmentation::SegmentError;

/// Turns job descriptions into `JobSegments`.
///
/// Holds no mutable state; one instance is shared across all requests.
#[derive(Clone)]
pub struct Segmenter {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl Segmenter {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// A segmenter with no remote endpoint. Every call resolves through the fallback.
    pub fn offline() -> Self {
        Self { generator: None }
    }

    pub fn has_remote(&self) -> bool {
        self.generator.is_some()
    }

    /// Extracts fields from `description`. Never fails: any remote failure is
    /// logged and answered by the pattern fallback instead.
    pub async fn segment(&self, description: &str) -> JobSegments {
        match self.segment_remote(description).await {
            Ok(segments) => {
                info!(
                    source = "remote",
                    fields = ?segments.populated_fields(),
                    "segmented job description"
                );
                segments
            }
            Err(SegmentError::Unavailable) => {
                debug!("no remote generator configured, using pattern fallback");
                extract_fallback(description)
            }
            Err(e) => {
                warn!(error = %e, "remote segmentation failed, using pattern fallback");
                extract_fallback(description)
            }
        }
    }

    /// One round-trip to the generator, no retry.
    async fn segment_remote(&self, description: &str) -> Result<JobSegments, SegmentError> {
        let generator = self.generator.as_ref().ok_or(SegmentError::Unavailable)?;
        let prompt = build_segmentation_prompt(description);
        let generated = generator.generate(&prompt).await?;
        parse_generated_text(&generated)
    }
}
