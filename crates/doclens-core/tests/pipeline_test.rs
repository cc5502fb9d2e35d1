//! End-to-end tests for the document pipeline public API.

use std::sync::Arc;

use doclens_core::{
    DocumentPipeline, DocumentType, KeywordExtractor, LexicalEngine, PipelineError,
};
use doclens_extractors::{ExtractError, ExtractionPipeline};

fn build_pipeline() -> DocumentPipeline {
    let engine = LexicalEngine::new().expect("lexical engine builds");
    DocumentPipeline::new(
        ExtractionPipeline::with_defaults(),
        KeywordExtractor::new(Arc::new(engine)),
    )
}

#[tokio::test]
async fn unsupported_content_type_is_a_client_error() {
    let pipeline = build_pipeline();
    let err = pipeline
        .process(b"hello", "text/plain", 3)
        .await
        .expect_err("text/plain is not a supported upload type");

    let PipelineError::Extract(extract) = err;
    match extract {
        ExtractError::UnsupportedType(ty) => assert_eq!(ty, "text/plain"),
        other => panic!("expected UnsupportedType, got {other:?}"),
    }
}

#[tokio::test]
async fn corrupt_image_yields_no_partial_result() {
    let pipeline = build_pipeline();
    let mut bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    bytes.extend_from_slice(b"garbage, not a real png");

    let result = pipeline.process(&bytes, "image/png", 3).await;
    assert!(result.is_err());
}

#[test]
fn resume_text_end_to_end() {
    let pipeline = build_pipeline();
    let text = "John Doe. Skills: Python, SQL. Experience: 5 years.";

    let response = pipeline.process_text(text, 2);

    assert_eq!(response.doc_type, DocumentType::Resume);
    assert!(response
        .summary
        .starts_with("This appears to be a resume highlighting experience and skills."));
    assert!(response.summary.contains("John Doe. Skills: Python, SQL."));
    assert!(!response.keywords.is_empty());
}

#[test]
fn responses_are_reproducible() {
    let pipeline = build_pipeline();
    let text = "Meeting agenda. Budget decisions. Action items assigned to owners.";

    let first = pipeline.process_text(text, 3);
    let second = pipeline.process_text(text, 3);

    assert_eq!(first, second);
    assert_eq!(first.doc_type, DocumentType::MeetingNotes);
}

#[test]
fn degraded_pipeline_reports_unavailable_nlp() {
    let pipeline = DocumentPipeline::new(
        ExtractionPipeline::with_defaults(),
        KeywordExtractor::disabled(),
    );

    assert!(!pipeline.nlp_available());
    let response = pipeline.process_text("Some text. More text.", 3);
    assert!(response.keywords.is_empty());
    assert!(!response.summary.is_empty());
}
