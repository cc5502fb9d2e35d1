//! doclens-extractors - Content-type routed text extraction.
//!
//! Provides extractors for PDF and raster-image uploads behind a unified
//! trait-based interface, plus a dispatch pipeline that routes raw bytes
//! to the right extractor by declared content type.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//! - `image` - Image format detection and loading
//! - `ocr` (default) - Image OCR via tesseract (requires tesseract installed)
//!
//! # Example
//!
//! ```ignore
//! use doclens_extractors::ExtractionPipeline;
//!
//! // Route by declared content type
//! let pipeline = ExtractionPipeline::with_defaults();
//! let content = pipeline.extract(&pdf_bytes, "application/pdf").await?;
//! println!("{}", content.text);
//! ```

mod error;
mod factory;
mod pipeline;
mod types;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "image")]
pub mod image;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use pipeline::ExtractionPipeline;
pub use types::{ExtractedContent, Modality};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "image")]
pub use image::ImageExtractor;

use async_trait::async_trait;

/// Core Extractor trait - all text extractors implement this.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Extract text content from bytes.
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent>;

    /// Supported content types for this extractor (lowercase).
    fn supported_types(&self) -> &[&str];

    /// Check if this extractor handles the given content type.
    fn supports(&self, content_type: &str) -> bool {
        self.supported_types().contains(&content_type)
    }

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
