//! PDF text extraction using pdf-extract.

use crate::error::{ExtractError, ExtractResult};
use crate::types::{ExtractedContent, Modality};
use crate::Extractor;
use async_trait::async_trait;
use tracing::error;

/// PDF text extractor backed by the pdf-extract library.
///
/// Concatenates the text of every page in page order, wrapping the
/// synchronous pdf-extract call in `spawn_blocking` to keep the async
/// runtime responsive.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for PdfExtractor {
    async fn extract(&self, content: &[u8]) -> ExtractResult<ExtractedContent> {
        let content = content.to_vec();

        let text = tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem(&content)
        })
        .await
        .map_err(|err| {
            error!("PDF extraction task failed: {err}");
            ExtractError::Pdf
        })?
        .map_err(|err| {
            error!("PDF extraction error: {err}");
            ExtractError::Pdf
        })?;

        Ok(ExtractedContent::new(
            text.trim().to_string(),
            Modality::Pdf,
        ))
    }

    fn supported_types(&self) -> &[&str] {
        // Browsers commonly submit PDFs as octet-stream; treat both as PDF.
        &["application/pdf", "application/octet-stream"]
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
