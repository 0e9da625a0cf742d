use std::sync::Arc;

use crate::config::Config;
use crate::segmentation::Segmenter;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub segmenter: Arc<Segmenter>,
    pub config: Config,
}
