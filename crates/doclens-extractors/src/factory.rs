//! Factory for creating extractors.

use std::sync::Arc;

use crate::error::{ExtractError, ExtractResult};
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "image")]
use crate::image::ImageExtractor;

/// Factory for creating text extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> Arc<dyn Extractor> {
        Arc::new(PdfExtractor::new())
    }

    /// Create an image extractor.
    #[cfg(feature = "image")]
    pub fn image() -> Arc<dyn Extractor> {
        Arc::new(ImageExtractor::new())
    }

    /// Create extractor for a given content type (lowercase).
    pub fn for_content_type(content_type: &str) -> ExtractResult<Arc<dyn Extractor>> {
        match content_type {
            #[cfg(feature = "pdf")]
            "application/pdf" | "application/octet-stream" => Ok(Self::pdf()),

            #[cfg(feature = "image")]
            "image/png" | "image/jpeg" => Ok(Self::image()),

            _ => Err(ExtractError::UnsupportedType(content_type.to_string())),
        }
    }

    /// Get all available extractors.
    #[allow(clippy::vec_init_then_push)]
    pub fn all() -> Vec<Arc<dyn Extractor>> {
        let mut extractors: Vec<Arc<dyn Extractor>> = Vec::new();

        #[cfg(feature = "pdf")]
        extractors.push(Self::pdf());

        #[cfg(feature = "image")]
        extractors.push(Self::image());

        extractors
    }
}
