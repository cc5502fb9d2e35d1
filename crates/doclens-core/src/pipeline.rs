//! Pipeline orchestration.
//!
//! Sequences extraction, classification-plus-summarization, and keyword
//! extraction, and assembles the terminal response. Extraction failures
//! surface to the caller; anything that goes wrong after extraction
//! succeeds degrades into a generic success response rather than failing
//! the request.

use std::panic::{catch_unwind, AssertUnwindSafe};

use doclens_extractors::ExtractionPipeline;
use tracing::error;

use crate::error::PipelineResult;
use crate::keywords::KeywordExtractor;
use crate::summarize::summarize;
use crate::types::{DocumentType, PipelineResponse};

/// Summary used for the degraded success response.
pub const DEGRADED_SUMMARY: &str = "Unexpected error occurred but system is running.";

/// The document understanding pipeline.
///
/// Holds the extraction dispatcher and the keyword extractor (with its
/// startup-decided NLP availability). Stateless across requests.
pub struct DocumentPipeline {
    extraction: ExtractionPipeline,
    keywords: KeywordExtractor,
}

impl DocumentPipeline {
    /// Assemble a pipeline from its stages.
    pub fn new(extraction: ExtractionPipeline, keywords: KeywordExtractor) -> Self {
        Self {
            extraction,
            keywords,
        }
    }

    /// Whether keyword extraction is running with an NLP engine attached.
    pub fn nlp_available(&self) -> bool {
        self.keywords.is_available()
    }

    /// Run the full pipeline over an upload.
    ///
    /// Extraction errors propagate; they are the only errors a caller
    /// sees. For a fixed upload and NLP availability the response is
    /// identical across calls.
    pub async fn process(
        &self,
        content: &[u8],
        content_type: &str,
        max_sentences: i64,
    ) -> PipelineResult<PipelineResponse> {
        let extracted = self.extraction.extract(content, content_type).await?;
        Ok(self.process_text(&extracted.text, max_sentences))
    }

    /// Run the post-extraction stages over already-extracted text.
    ///
    /// Runs behind a panic boundary: once extraction has succeeded the
    /// request must not hard-fail, so an unexpected panic in any stage is
    /// logged and converted into the degraded response.
    pub fn process_text(&self, text: &str, max_sentences: i64) -> PipelineResponse {
        catch_unwind(AssertUnwindSafe(|| self.analyze(text, max_sentences))).unwrap_or_else(
            |_| {
                error!("document analysis failed unexpectedly, returning degraded response");
                Self::degraded_response()
            },
        )
    }

    fn analyze(&self, text: &str, max_sentences: i64) -> PipelineResponse {
        let keywords = self.keywords.extract(text);
        let result = summarize(text, max_sentences);

        PipelineResponse {
            summary: result.summary,
            keywords: keywords.into_iter().collect(),
            doc_type: result.doc_type,
        }
    }

    fn degraded_response() -> PipelineResponse {
        PipelineResponse {
            summary: DEGRADED_SUMMARY.to_string(),
            keywords: Vec::new(),
            doc_type: DocumentType::Generic,
        }
    }
}
