//! Extraction dispatch: routes raw bytes to the extractor for their
//! declared content type.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::types::ExtractedContent;
use crate::Extractor;

/// Dispatcher routing uploads to the extractor registered for their
/// declared content type.
///
/// Content types are matched case-insensitively. The rejected type is
/// preserved verbatim in the `UnsupportedType` error so callers can name
/// it in diagnostics.
pub struct ExtractionPipeline {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractionPipeline {
    /// Create new empty pipeline.
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Create pipeline with all available extractors.
    pub fn with_defaults() -> Self {
        Self {
            extractors: crate::ExtractorFactory::all(),
        }
    }

    /// Add an extractor to the pipeline.
    pub fn add_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractors.push(extractor);
        self
    }

    /// Extract text using the extractor registered for the content type.
    pub async fn extract(
        &self,
        content: &[u8],
        content_type: &str,
    ) -> ExtractResult<ExtractedContent> {
        let normalized = content_type.to_ascii_lowercase();

        for extractor in &self.extractors {
            if extractor.supports(&normalized) {
                return extractor.extract(content).await;
            }
        }

        Err(ExtractError::UnsupportedType(content_type.to_string()))
    }

    /// Check if the pipeline can handle a given content type.
    pub fn supports(&self, content_type: &str) -> bool {
        let normalized = content_type.to_ascii_lowercase();
        self.extractors.iter().any(|e| e.supports(&normalized))
    }

    /// List all supported content types.
    pub fn supported_types(&self) -> Vec<&str> {
        self.extractors
            .iter()
            .flat_map(|e| e.supported_types().iter().copied())
            .collect()
    }
}

impl Default for ExtractionPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_supports_known_types() {
        let pipeline = ExtractionPipeline::with_defaults();

        #[cfg(feature = "pdf")]
        {
            assert!(pipeline.supports("application/pdf"));
            assert!(pipeline.supports("application/octet-stream"));
        }

        #[cfg(feature = "image")]
        {
            assert!(pipeline.supports("image/png"));
            assert!(pipeline.supports("image/jpeg"));
        }
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_pipeline_matching_is_case_insensitive() {
        let pipeline = ExtractionPipeline::with_defaults();
        assert!(pipeline.supports("Application/PDF"));
        assert!(pipeline.supports("APPLICATION/PDF"));
    }

    #[test]
    fn test_pipeline_unsupported_type() {
        let pipeline = ExtractionPipeline::with_defaults();
        assert!(!pipeline.supports("text/plain"));
        assert!(!pipeline.supports("video/mp4"));
    }

    #[tokio::test]
    async fn test_pipeline_rejection_preserves_original_casing() {
        let pipeline = ExtractionPipeline::with_defaults();
        let result = pipeline.extract(b"irrelevant", "Text/Plain").await;

        match result {
            Err(ExtractError::UnsupportedType(ty)) => assert_eq!(ty, "Text/Plain"),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_add_extractor_registers_support() {
        let pipeline = ExtractionPipeline::new().add_extractor(crate::ExtractorFactory::pdf());
        assert!(pipeline.supports("application/pdf"));
        assert!(!pipeline.supports("image/png"));
        assert!(pipeline.supported_types().contains(&"application/pdf"));
    }

    #[tokio::test]
    async fn test_empty_pipeline_rejects_everything() {
        let pipeline = ExtractionPipeline::new();
        let result = pipeline.extract(b"test", "application/pdf").await;
        assert!(matches!(result, Err(ExtractError::UnsupportedType(_))));
    }
}
