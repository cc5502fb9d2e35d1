//! Server state management.

use std::sync::Arc;

use doclens_core::{DocumentPipeline, PipelineConfig};

/// Shared application state.
///
/// The pipeline is read-only after startup; cloning the state shares one
/// pipeline across every in-flight request.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<DocumentPipeline>,
    pub config: PipelineConfig,
}

impl AppState {
    /// Create application state around a built pipeline.
    pub fn new(pipeline: DocumentPipeline, config: PipelineConfig) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            config,
        }
    }

    /// Whether keyword extraction has an NLP engine attached.
    pub fn nlp_available(&self) -> bool {
        self.pipeline.nlp_available()
    }
}
