use std::sync::Arc;

use crate::acquisition::{DefaultDocumentReader, DocumentReader};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; the extractor itself keeps no state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable upload decoder. Default: `DefaultDocumentReader` (lopdf + pdf-extract).
    pub reader: Arc<dyn DocumentReader>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let reader = Arc::new(DefaultDocumentReader::from_config(&config));
        Self { config, reader }
    }
}
